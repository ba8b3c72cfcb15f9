//! # tagless
//!
//! Effect-generic programs written once and interpreted over different
//! effect carriers.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Kind`](typeclass::Kind) brands emulate higher-kinded
//!   types; [`Monad`](typeclass::Monad) sequences computations in a carrier
//! - **Effect Algebra**: [`IoAlgebra`](effect::IoAlgebra) declares
//!   read / log / calculate; [`program`](effect::program) composes them
//! - **Carriers**: `Option`, `AsyncIO` and `Identity` interpretations
//! - **Control**: a lazily generated sequence of primes
//! - **DSL**: relative date arithmetic (`days(3).ago()`)
//!
//! ## Feature Flags
//!
//! - `async`: the `AsyncIO` type and the Future carrier (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use tagless::prelude::*;
//!
//! let diagnostics = Diagnostics::captured();
//! let result = program(&IdentityCarrier::new(diagnostics.clone()));
//!
//! assert_eq!(result, Identity("Id ok".to_string()));
//! assert_eq!(diagnostics.lines(), vec!["identity log: Id ok"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use tagless::prelude::*;
/// ```
pub mod prelude {
    pub use crate::carrier::*;
    pub use crate::control::*;
    pub use crate::dsl::*;
    pub use crate::effect::*;
    pub use crate::typeclass::*;
}

pub mod carrier;
pub mod config;
pub mod control;
pub mod dsl;
pub mod effect;
pub mod typeclass;
