//! Concrete carriers that interpret the IO algebra.
//!
//! | Carrier | Container | Effect |
//! |---|---|---|
//! | [`OptionCarrier`] | `Option<A>` | the value may be absent |
//! | [`FutureCarrier`] | `AsyncIO<A>` | the value is computed asynchronously |
//! | [`IdentityCarrier`] | `Identity<A>` | none |
//!
//! Each carrier implements both [`IoAlgebra`](crate::effect::IoAlgebra) and
//! [`Monad`](crate::typeclass::Monad), so it can run
//! [`program`](crate::effect::program). Carriers are cheap handles: clones
//! share the same [`Diagnostics`](crate::effect::Diagnostics) sink.

#[cfg(feature = "async")]
mod future;
mod identity;
mod option;

#[cfg(feature = "async")]
pub use future::{FAILURE_BANNER, FutureCarrier};
pub use identity::IdentityCarrier;
pub use option::OptionCarrier;

static_assertions::assert_impl_all!(OptionCarrier: Send, Sync, Clone);
static_assertions::assert_impl_all!(IdentityCarrier: Send, Sync, Clone);
#[cfg(feature = "async")]
static_assertions::assert_impl_all!(FutureCarrier: Send, Sync, Clone);
