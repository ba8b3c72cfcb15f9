//! Type class traits for writing effect-generic code.
//!
//! - [`Kind`]: a brand standing for a type constructor
//! - [`Monad`]: sequencing computations within a carrier
//! - [`Identity`]: the wrapper that adds no effect
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses brands with a Generic Associated Type to emulate HKT,
//! so that `Monad` can be defined once for `Option`, `AsyncIO` and
//! `Identity` alike.
//!
//! # Examples
//!
//! ```rust
//! use tagless::carrier::IdentityCarrier;
//! use tagless::effect::Diagnostics;
//! use tagless::typeclass::{Identity, Monad};
//!
//! let carrier = IdentityCarrier::new(Diagnostics::captured());
//! let lifted = carrier.lift(20);
//! let sum = carrier.chain(lifted, |n: i32| Identity(n + 1));
//! assert_eq!(sum.into_inner(), 21);
//! ```

mod higher;
mod identity;
mod monad;

pub use higher::{Kind, Value};
pub use identity::Identity;
pub use monad::Monad;
