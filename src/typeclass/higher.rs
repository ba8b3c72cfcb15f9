//! Higher-Kinded Type emulation through brands and Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types. We cannot write a
//! trait that takes `Option<_>` or `AsyncIO<_>` as a parameter. Instead, a
//! *brand* type stands in for the type constructor, and the constructor is
//! recovered through the generic associated type [`Kind::Of`].
//!
//! Brands are values, not just types: an algebra instance such as a carrier
//! can carry state (a diagnostics sink, a step counter) and still name the
//! container it produces.
//!
//! # Example
//!
//! ```rust
//! use tagless::typeclass::Kind;
//!
//! struct OptionBrand;
//!
//! impl Kind for OptionBrand {
//!     type Of<A> = Option<A>;
//! }
//!
//! let wrapped: <OptionBrand as Kind>::Of<i32> = Some(42);
//! assert_eq!(wrapped, Some(42));
//! ```

use std::fmt::Debug;

/// A brand standing for a single-argument type constructor.
///
/// # Laws
///
/// For any brand `P`, `P::Of<A>` must be the *only* way values of type `A`
/// are wrapped by `P`: code generic over `P` can never reach inside a
/// `P::Of<A>` except through the operations of an algebra over `P`.
pub trait Kind {
    /// The type constructor applied to `A`.
    ///
    /// For an Option brand, `Of<i32>` is `Option<i32>`.
    type Of<A>;
}

/// Values that can be threaded through any carrier.
///
/// `Debug` lets carriers print intermediate values; `Send + 'static` lets the
/// asynchronous carrier move them between worker threads.
pub trait Value: Debug + Send + 'static {}

impl<T: Debug + Send + 'static> Value for T {}
