//! Effect algebra, the generic program, and the async building blocks.
//!
//! # The IO Algebra
//!
//! [`IoAlgebra`] declares the effects a program may ask for. Together with
//! [`Monad`](crate::typeclass::Monad) it is enough to write [`program`]
//! once and interpret it over any carrier:
//!
//! ```rust
//! use tagless::carrier::{IdentityCarrier, OptionCarrier};
//! use tagless::effect::{Diagnostics, program};
//!
//! let identity = program(&IdentityCarrier::new(Diagnostics::captured()));
//! assert_eq!(identity.into_inner(), "Id ok");
//!
//! let option = program(&OptionCarrier::new(Diagnostics::captured()));
//! assert_eq!(
//!     option.as_deref(),
//!     Some("[937, 941, 947, 953, 967, 971, 977, 983, 991, 997]")
//! );
//! ```
//!
//! # AsyncIO
//!
//! [`AsyncIO`] is the container of the asynchronous carrier: a deferred
//! computation that runs only when `run_async` is awaited.
//!
//! # Failures
//!
//! [`CarrierError`] and [`root_cause`] cover the asynchronous failure path.

mod algebra;
mod diagnostics;
mod error;
mod program;

pub use algebra::IoAlgebra;
pub use diagnostics::Diagnostics;
pub use error::{CarrierError, causes, error_chain_string, root_cause};
pub use program::{program, program_traced};

// =============================================================================
// AsyncIO (requires async feature)
// =============================================================================

#[cfg(feature = "async")]
mod async_io;

#[cfg(feature = "async")]
pub use async_io::{AsyncIO, panic_message};
