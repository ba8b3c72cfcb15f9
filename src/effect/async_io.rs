//! `AsyncIO` - deferred asynchronous computations.
//!
//! `AsyncIO<A>` is the container of the asynchronous carrier. It describes an
//! async computation producing an `A` but does not run it: execution happens
//! only when `run_async` is awaited, typically inside a spawned tokio task.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tagless::effect::AsyncIO;
//!
//! #[tokio::main]
//! async fn main() {
//!     let async_io = AsyncIO::pure(10)
//!         .fmap(|x| x * 2)
//!         .flat_map(|x| AsyncIO::pure(x + 1));
//!     assert_eq!(async_io.run_async().await, 21);
//! }
//! ```

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;

use futures::FutureExt;

type BoxedRun<A> = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = A> + Send>> + Send>;

/// A deferred asynchronous computation.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `AsyncIO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(AsyncIO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct AsyncIO<A> {
    run_async_io: BoxedRun<A>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Creates a new `AsyncIO` from a closure returning a future.
    ///
    /// The closure is not called until `run_async` is awaited.
    ///
    /// ```rust,ignore
    /// use tagless::effect::AsyncIO;
    ///
    /// let async_io = AsyncIO::new(|| async {
    ///     tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    ///     42
    /// });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || Box::pin(action())),
        }
    }
}

impl<A: Send + 'static> AsyncIO<A> {
    /// Wraps an already-resolved value.
    pub fn pure(value: A) -> Self {
        Self {
            run_async_io: Box::new(move || Box::pin(async move { value })),
        }
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Runs the computation and returns its result.
    ///
    /// This is the only way to extract a value from an `AsyncIO`.
    pub async fn run_async(self) -> A {
        (self.run_async_io)().await
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: 'static> AsyncIO<A> {
    /// Transforms the result with a plain function.
    pub fn fmap<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move { function(self.run_async().await) })
    }

    /// Chains a computation that depends on this one's result.
    ///
    /// The continuation only runs after this computation has resolved, so
    /// steps are strictly ordered even when each lands on a different worker.
    pub fn flat_map<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
        B: 'static,
    {
        AsyncIO::new(move || async move {
            let value_a = self.run_async().await;
            function(value_a).run_async().await
        })
    }
}

// =============================================================================
// Failure Handling
// =============================================================================

impl<A: Send + 'static> AsyncIO<A> {
    /// Turns a panic raised while running into an error value.
    ///
    /// `handler` receives the panic payload.
    ///
    /// ```rust,ignore
    /// use tagless::effect::AsyncIO;
    ///
    /// let panicking = AsyncIO::<i32>::new(|| async { panic!("oops") });
    /// let recovered = panicking.catch_async(|_| "recovered".to_string());
    /// assert_eq!(recovered.run_async().await, Err("recovered".to_string()));
    /// ```
    pub fn catch_async<E, F>(self, handler: F) -> AsyncIO<Result<A, E>>
    where
        F: FnOnce(Box<dyn Any + Send>) -> E + Send + 'static,
        E: Send + 'static,
    {
        AsyncIO::new(move || async move {
            match AssertUnwindSafe(self.run_async()).catch_unwind().await {
                Ok(value) => Ok(value),
                Err(panic_payload) => Err(handler(panic_payload)),
            }
        })
    }
}

impl<A> fmt::Display for AsyncIO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<AsyncIO>")
    }
}

impl<A> fmt::Debug for AsyncIO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<AsyncIO>")
    }
}

/// Renders a panic payload as text, for panics raised with a string message.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[rstest]
    #[tokio::test]
    async fn pure_resolves_to_value() {
        assert_eq!(AsyncIO::pure(42).run_async().await, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn new_is_lazy() {
        let executed = Arc::new(AtomicBool::new(false));
        let flag = executed.clone();

        let async_io = AsyncIO::new(move || async move {
            flag.store(true, Ordering::SeqCst);
            1
        });

        assert!(!executed.load(Ordering::SeqCst));
        assert_eq!(async_io.run_async().await, 1);
        assert!(executed.load(Ordering::SeqCst));
    }

    #[rstest]
    #[tokio::test]
    async fn flat_map_and_fmap_compose() {
        let async_io = AsyncIO::pure(10)
            .fmap(|x| x * 2)
            .flat_map(|x| AsyncIO::pure(x + 1));
        assert_eq!(async_io.run_async().await, 21);
    }

    #[rstest]
    #[tokio::test]
    async fn catch_async_converts_panic() {
        let panicking = AsyncIO::<i32>::new(|| async { panic!("boom") });
        let caught = panicking
            .catch_async(|payload| panic_message(payload.as_ref()))
            .run_async()
            .await;
        assert_eq!(caught, Err("boom".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn catch_async_passes_success_through() {
        let caught = AsyncIO::pure(5)
            .catch_async(|payload| panic_message(payload.as_ref()))
            .run_async()
            .await;
        assert_eq!(caught, Ok(5));
    }

    #[rstest]
    fn display_hides_contents() {
        assert_eq!(AsyncIO::pure(1).to_string(), "<AsyncIO>");
    }
}
