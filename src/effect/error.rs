//! Error types for the effect carriers and root-cause unwrapping.
//!
//! Failures of the asynchronous carrier are wrapped as they travel up to the
//! completion observer. The observer only reports the innermost cause, found
//! with [`root_cause`].

use std::error::Error;

use thiserror::Error;

/// Errors raised while running a program against a carrier.
///
/// # Examples
///
/// ```rust
/// use tagless::effect::{CarrierError, root_cause};
///
/// let error = CarrierError::Async {
///     carrier: "future",
///     source: Box::new(CarrierError::TaskPanicked {
///         message: "boom".to_string(),
///     }),
/// };
/// assert_eq!(root_cause(&error).to_string(), "task panicked: boom");
/// ```
#[derive(Debug, Error)]
pub enum CarrierError {
    /// A step of the chain panicked while running.
    #[error("task panicked: {message}")]
    TaskPanicked {
        /// The panic message, when the payload was a string.
        message: String,
    },

    /// The runtime could not hand back the task's result.
    #[cfg(feature = "async")]
    #[error("task could not be joined")]
    Join {
        /// The runtime's join failure.
        #[source]
        source: tokio::task::JoinError,
    },

    /// A carrier's program failed.
    #[error("{carrier} carrier failed")]
    Async {
        /// Label of the carrier that ran the program.
        carrier: &'static str,
        /// What went wrong underneath.
        #[source]
        source: Box<CarrierError>,
    },
}

/// Follows `source()` links until an error with no source is reached.
///
/// Returns `error` itself when it has no source. Iterative, so deep chains do
/// not grow the stack.
pub fn root_cause<'a>(error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Iterates an error and all of its sources, outermost first.
pub fn causes<'a>(
    error: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(error), |&current| current.source())
}

/// Renders an error chain as `outer -> middle -> inner`.
pub fn error_chain_string(error: &(dyn Error + 'static)) -> String {
    causes(error)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Error)]
    #[error("{name}")]
    struct Layer {
        name: String,
        #[source]
        source: Option<Box<Layer>>,
    }

    fn nested(depth: usize) -> Layer {
        (1..=depth).fold(
            Layer {
                name: "innermost".to_string(),
                source: None,
            },
            |inner, level| Layer {
                name: format!("wrapper {level}"),
                source: Some(Box::new(inner)),
            },
        )
    }

    #[rstest]
    fn root_cause_of_three_wrappers_is_fourth_error() {
        let error = nested(3);
        assert_eq!(root_cause(&error).to_string(), "innermost");
    }

    #[rstest]
    fn root_cause_without_source_is_itself() {
        let error = nested(0);
        let root = root_cause(&error);
        assert!(std::ptr::addr_eq(root, &error as &(dyn Error + 'static)));
    }

    #[rstest]
    fn root_cause_survives_deep_chains() {
        let error = nested(1_000);
        assert_eq!(root_cause(&error).to_string(), "innermost");
    }

    #[rstest]
    #[case(0, 1)]
    #[case(3, 4)]
    fn causes_visits_every_link(#[case] depth: usize, #[case] expected: usize) {
        assert_eq!(causes(&nested(depth)).count(), expected);
    }

    #[rstest]
    fn error_chain_string_joins_outermost_first() {
        assert_eq!(
            error_chain_string(&nested(2)),
            "wrapper 2 -> wrapper 1 -> innermost"
        );
    }

    #[rstest]
    fn async_wrapper_unwraps_to_panic() {
        let error = CarrierError::Async {
            carrier: "future",
            source: Box::new(CarrierError::TaskPanicked {
                message: "boom".to_string(),
            }),
        };
        assert_eq!(error.to_string(), "future carrier failed");
        assert_eq!(root_cause(&error).to_string(), "task panicked: boom");
    }
}
