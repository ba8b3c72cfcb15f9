//! The Future carrier: values computed asynchronously.

use tokio::task::JoinHandle;

use crate::effect::{AsyncIO, CarrierError, Diagnostics, IoAlgebra, panic_message, root_cause};
use crate::typeclass::{Kind, Monad, Value};

/// Banner written to stderr before the root cause of an asynchronous failure.
pub const FAILURE_BANNER: &str = "error: asynchronous program failed";

/// Interprets the IO algebra with [`AsyncIO`].
///
/// `read` stands in for a web-service call and resolves immediately;
/// `calculate` resolves to its input unchanged. `chain` and `lift` delegate
/// to `AsyncIO::flat_map` and `AsyncIO::pure`, so each step starts only
/// after the previous one resolved.
///
/// # Examples
///
/// ```rust,ignore
/// use tagless::carrier::FutureCarrier;
/// use tagless::effect::{Diagnostics, program};
///
/// let carrier = FutureCarrier::new(Diagnostics::captured());
/// let result = program(&carrier).run_async().await;
/// assert_eq!(result, "read from web service");
/// ```
#[derive(Debug, Clone)]
pub struct FutureCarrier {
    diagnostics: Diagnostics,
}

impl FutureCarrier {
    /// Label used in diagnostic and result lines.
    pub const LABEL: &'static str = "future";

    /// What `read` resolves to.
    pub const READ_VALUE: &'static str = "read from web service";

    /// Creates a carrier reporting to `diagnostics`.
    pub const fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Runs `computation` on the tokio runtime and hands its outcome to
    /// `observer` once it settles.
    ///
    /// A panic inside the computation reaches the observer as
    /// [`CarrierError::Async`] wrapping [`CarrierError::TaskPanicked`].
    /// Await the returned handle to block until the observer has run.
    pub fn spawn_observed<A, F>(computation: AsyncIO<A>, observer: F) -> JoinHandle<()>
    where
        A: Value,
        F: FnOnce(Result<A, CarrierError>) + Send + 'static,
    {
        tokio::spawn(async move {
            let outcome = computation
                .catch_async(|payload| CarrierError::TaskPanicked {
                    message: panic_message(payload.as_ref()),
                })
                .run_async()
                .await
                .map_err(|source| CarrierError::Async {
                    carrier: Self::LABEL,
                    source: Box::new(source),
                });
            observer(outcome);
        })
    }

    /// Runs `computation` on the tokio runtime and waits for its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`CarrierError::Async`] when the computation panicked or the
    /// runtime could not join the task.
    pub async fn complete<A: Value>(computation: AsyncIO<A>) -> Result<A, CarrierError> {
        let (sender, receiver) = tokio::sync::oneshot::channel();
        let handle = Self::spawn_observed(computation, move |outcome| {
            sender.send(outcome).ok();
        });
        if let Err(source) = handle.await {
            return Err(CarrierError::Async {
                carrier: Self::LABEL,
                source: Box::new(CarrierError::Join { source }),
            });
        }
        match receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(CarrierError::Async {
                carrier: Self::LABEL,
                source: Box::new(CarrierError::TaskPanicked {
                    message: "observer dropped the outcome".to_string(),
                }),
            }),
        }
    }

    /// The two stderr lines reporting a failed computation: the banner, then
    /// the innermost cause.
    pub fn describe_failure(error: &CarrierError) -> [String; 2] {
        [FAILURE_BANNER.to_string(), root_cause(error).to_string()]
    }
}

impl Kind for FutureCarrier {
    type Of<A> = AsyncIO<A>;
}

impl IoAlgebra for FutureCarrier {
    fn read(&self) -> AsyncIO<String> {
        AsyncIO::pure(Self::READ_VALUE.to_string())
    }

    fn log(&self, line: String) -> AsyncIO<()> {
        let diagnostics = self.diagnostics.clone();
        AsyncIO::new(move || async move {
            diagnostics.emit(format!("{} log: {line}", Self::LABEL));
        })
    }

    fn calculate(&self, sentence: String) -> AsyncIO<String> {
        AsyncIO::pure(sentence)
    }
}

impl Monad for FutureCarrier {
    fn chain<A, B, F>(&self, fa: AsyncIO<A>, function: F) -> AsyncIO<B>
    where
        A: Value,
        B: Value,
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
    {
        fa.flat_map(function)
    }

    fn lift<A: Value>(&self, value: A) -> AsyncIO<A> {
        AsyncIO::pure(value)
    }
}
