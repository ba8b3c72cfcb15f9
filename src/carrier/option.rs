//! The Option carrier: values that may be absent.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::control::describe_last_primes;
use crate::effect::{Diagnostics, IoAlgebra};
use crate::typeclass::{Kind, Monad, Value};

/// Interprets the IO algebra with `Option`.
///
/// `read` yields a prime-calculation request and `calculate` answers it with
/// the last ten primes up to the requested threshold. Once any step yields
/// `None`, every later step is skipped.
///
/// Every `chain` bumps a step counter shared by all clones and reports the
/// intermediate value before delegating to `Option::and_then`.
///
/// # Examples
///
/// ```rust
/// use tagless::carrier::OptionCarrier;
/// use tagless::effect::{Diagnostics, program};
///
/// let carrier = OptionCarrier::with_read(Diagnostics::captured(), None);
/// assert_eq!(program(&carrier), None);
/// ```
#[derive(Debug, Clone)]
pub struct OptionCarrier {
    diagnostics: Diagnostics,
    steps: Arc<AtomicUsize>,
    input: Option<String>,
}

impl OptionCarrier {
    /// Label used in diagnostic and result lines.
    pub const LABEL: &'static str = "option";

    /// What `read` yields by default.
    pub const READ_VALUE: &'static str = "getListOfPrimesTo 1000";

    /// Creates a carrier whose `read` yields [`Self::READ_VALUE`].
    pub fn new(diagnostics: Diagnostics) -> Self {
        Self::with_read(diagnostics, Some(Self::READ_VALUE.to_string()))
    }

    /// Creates a carrier whose `read` yields `input`, possibly absent.
    pub fn with_read(diagnostics: Diagnostics, input: Option<String>) -> Self {
        Self {
            diagnostics,
            steps: Arc::new(AtomicUsize::new(0)),
            input,
        }
    }

    /// Number of `chain` steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps.load(Ordering::SeqCst)
    }
}

impl Kind for OptionCarrier {
    type Of<A> = Option<A>;
}

impl IoAlgebra for OptionCarrier {
    fn read(&self) -> Option<String> {
        self.input.clone()
    }

    fn log(&self, line: String) -> Option<()> {
        self.diagnostics.emit(format!("{} log: {line}", Self::LABEL));
        Some(())
    }

    fn calculate(&self, sentence: String) -> Option<String> {
        match describe_last_primes(&sentence) {
            Ok(primes) => Some(primes),
            Err(error) => {
                tracing::warn!(%error, "cannot calculate primes, yielding absence");
                None
            }
        }
    }
}

impl Monad for OptionCarrier {
    fn chain<A, B, F>(&self, fa: Option<A>, function: F) -> Option<B>
    where
        A: Value,
        B: Value,
        F: FnOnce(A) -> Option<B> + Send + 'static,
    {
        let step = self.steps.fetch_add(1, Ordering::SeqCst) + 1;
        self.diagnostics
            .emit(format!("{} chain step {step}: {fa:?}", Self::LABEL));
        fa.and_then(function)
    }

    fn lift<A: Value>(&self, value: A) -> Option<A> {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn read_yields_prime_request() {
        let carrier = OptionCarrier::new(Diagnostics::captured());
        assert_eq!(carrier.read().as_deref(), Some("getListOfPrimesTo 1000"));
    }

    #[rstest]
    fn log_reports_input() {
        let diagnostics = Diagnostics::captured();
        let carrier = OptionCarrier::new(diagnostics.clone());

        assert_eq!(carrier.log("hello".to_string()), Some(()));
        assert_eq!(diagnostics.lines(), vec!["option log: hello"]);
    }

    #[rstest]
    #[case("getListOfPrimesTo 2", Some("[2]"))]
    #[case("getListOfPrimesTo 1", Some("[]"))]
    #[case("getListOfPrimesTo lots", None)]
    #[case("no threshold here", None)]
    fn calculate_answers_or_yields_absence(
        #[case] sentence: &str,
        #[case] expected: Option<&str>,
    ) {
        let carrier = OptionCarrier::new(Diagnostics::captured());
        assert_eq!(carrier.calculate(sentence.to_string()).as_deref(), expected);
    }

    #[rstest]
    fn chain_counts_steps_and_reports_value() {
        let diagnostics = Diagnostics::captured();
        let carrier = OptionCarrier::new(diagnostics.clone());

        let first = carrier.chain(Some(1), |n: i32| Some(n + 1));
        let second = carrier.chain(first, |n: i32| Some(n * 10));

        assert_eq!(second, Some(20));
        assert_eq!(carrier.steps(), 2);
        assert_eq!(
            diagnostics.lines(),
            vec!["option chain step 1: Some(1)", "option chain step 2: Some(2)"]
        );
    }

    #[rstest]
    fn clones_share_step_counter() {
        let carrier = OptionCarrier::new(Diagnostics::captured());
        let clone = carrier.clone();

        let _ = clone.chain(Some(()), |()| Some(()));
        assert_eq!(carrier.steps(), 1);
    }

    #[rstest]
    fn chain_on_absence_skips_continuation() {
        let carrier = OptionCarrier::new(Diagnostics::captured());
        let result = carrier.chain(None::<i32>, |_| -> Option<i32> {
            panic!("continuation must not run")
        });
        assert_eq!(result, None);
    }
}
