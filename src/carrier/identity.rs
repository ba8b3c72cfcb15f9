//! The Identity carrier: plain synchronous values.

use crate::effect::{Diagnostics, IoAlgebra};
use crate::typeclass::{Identity, Kind, Monad, Value};

/// Interprets the IO algebra with [`Identity`], adding no effect at all.
///
/// `chain(p, f)` is `f(p)` and `lift(a)` is `a`, both through the wrapper.
/// There is no failure channel: a panic in any step propagates immediately.
#[derive(Debug, Clone)]
pub struct IdentityCarrier {
    diagnostics: Diagnostics,
}

impl IdentityCarrier {
    /// Label used in diagnostic and result lines.
    pub const LABEL: &'static str = "identity";

    /// What `read` yields.
    pub const READ_VALUE: &'static str = "Id ok";

    /// Creates a carrier reporting to `diagnostics`.
    pub const fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }
}

impl Kind for IdentityCarrier {
    type Of<A> = Identity<A>;
}

impl IoAlgebra for IdentityCarrier {
    fn read(&self) -> Identity<String> {
        Identity(Self::READ_VALUE.to_string())
    }

    fn log(&self, line: String) -> Identity<()> {
        self.diagnostics.emit(format!("{} log: {line}", Self::LABEL));
        Identity(())
    }

    fn calculate(&self, sentence: String) -> Identity<String> {
        Identity(sentence)
    }
}

impl Monad for IdentityCarrier {
    fn chain<A, B, F>(&self, fa: Identity<A>, function: F) -> Identity<B>
    where
        A: Value,
        B: Value,
        F: FnOnce(A) -> Identity<B> + Send + 'static,
    {
        function(fa.into_inner())
    }

    fn lift<A: Value>(&self, value: A) -> Identity<A> {
        Identity(value)
    }
}
