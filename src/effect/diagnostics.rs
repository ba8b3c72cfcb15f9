//! Diagnostic output shared by every carrier.
//!
//! Carriers report each `log` and `chain` step as one human-readable line.
//! The driver echoes those lines to stdout; tests capture them instead and
//! assert on what was (or was not) emitted.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Echo {
    Stdout,
    Silent,
}

/// A cloneable sink for carrier diagnostic lines.
///
/// Clones share the same recorded lines. Only a captured sink records.
///
/// # Examples
///
/// ```rust
/// use tagless::effect::Diagnostics;
///
/// let diagnostics = Diagnostics::captured();
/// diagnostics.emit("identity log: Id ok");
/// assert_eq!(diagnostics.lines(), vec!["identity log: Id ok".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostics {
    lines: Arc<Mutex<Vec<String>>>,
    echo: Echo,
}

impl Diagnostics {
    /// Prints each line to stdout without keeping it; [`lines`](Self::lines)
    /// stays empty.
    pub fn stdout() -> Self {
        Self::with_echo(Echo::Stdout)
    }

    /// Records lines without printing them.
    pub fn captured() -> Self {
        Self::with_echo(Echo::Silent)
    }

    fn with_echo(echo: Echo) -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            echo,
        }
    }

    /// Emits one diagnostic line.
    pub fn emit(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "tagless::diagnostics", "{line}");
        match self.echo {
            Echo::Stdout => println!("{line}"),
            Echo::Silent => self.lines.lock().push(line),
        }
    }

    /// Returns a snapshot of every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of lines emitted so far.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn captured_starts_empty() {
        let diagnostics = Diagnostics::captured();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.len(), 0);
    }

    #[rstest]
    fn clones_share_recorded_lines() {
        let diagnostics = Diagnostics::captured();
        let clone = diagnostics.clone();

        clone.emit("first");
        diagnostics.emit(String::from("second"));

        assert_eq!(diagnostics.lines(), vec!["first", "second"]);
        assert_eq!(clone.len(), 2);
    }

    #[rstest]
    fn stdout_sink_keeps_nothing() {
        let diagnostics = Diagnostics::stdout();
        diagnostics.emit("printed");
        assert!(diagnostics.is_empty());
    }
}
