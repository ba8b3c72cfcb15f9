//! The IO algebra - the effects a program may ask for.
//!
//! `IoAlgebra` is an *object algebra*: it declares the effectful operations
//! (obtain input, record a log line, derive a result) over an abstract
//! carrier brand. A program written against it never learns whether its
//! values are optional, deferred, or plain.

use crate::typeclass::Kind;

/// Effectful operations available to a program, interpreted by a carrier.
///
/// Each carrier provides exactly one implementation, selected statically by
/// the generic parameter of the program that uses it.
///
/// # Examples
///
/// ```rust
/// use tagless::carrier::IdentityCarrier;
/// use tagless::effect::{Diagnostics, IoAlgebra};
///
/// let carrier = IdentityCarrier::new(Diagnostics::captured());
/// assert_eq!(carrier.read().into_inner(), "Id ok");
/// ```
pub trait IoAlgebra: Kind {
    /// Obtains the program's input.
    fn read(&self) -> Self::Of<String>;

    /// Records a log line.
    fn log(&self, line: String) -> Self::Of<()>;

    /// Derives a result from an input sentence.
    fn calculate(&self, sentence: String) -> Self::Of<String>;
}
