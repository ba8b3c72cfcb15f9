//! The effect-generic program.
//!
//! [`program`] is written once against [`IoAlgebra`] and [`Monad`] and runs
//! unchanged over every carrier. It reads an input, logs it, and derives a
//! result from the *original* input:
//!
//! ```text
//! for {
//!     input  <- read
//!     _      <- log(input)
//!     result <- calculate(input)
//! } yield result
//! ```

use super::algebra::IoAlgebra;
use crate::typeclass::Monad;

/// Reads an input, logs it, then calculates a result from it.
///
/// Steps run strictly left to right. The value reaching `calculate` is the
/// one produced by `read`, never the result of `log`. The final value is
/// whatever `calculate` produced, not re-lifted. `program` itself has no side
/// effects; all of them happen inside the carrier's operations.
///
/// # Examples
///
/// ```rust
/// use tagless::carrier::IdentityCarrier;
/// use tagless::effect::{Diagnostics, program};
///
/// let diagnostics = Diagnostics::captured();
/// let result = program(&IdentityCarrier::new(diagnostics.clone()));
///
/// assert_eq!(result.into_inner(), "Id ok");
/// assert_eq!(diagnostics.lines(), vec!["identity log: Id ok"]);
/// ```
pub fn program<P>(carrier: &P) -> P::Of<String>
where
    P: IoAlgebra + Monad + Clone + Send + Sync + 'static,
{
    let steps = carrier.clone();
    carrier.chain::<String, String, _>(carrier.read(), move |input| {
        let logged = steps.log(input.clone());
        let calculator = steps.clone();
        steps.chain::<(), String, _>(logged, move |()| calculator.calculate(input))
    })
}

/// Runs [`program`] inside a tracing span labelled with the carrier's name.
pub fn program_traced<P>(label: &'static str, carrier: &P) -> P::Of<String>
where
    P: IoAlgebra + Monad + Clone + Send + Sync + 'static,
{
    let span = tracing::info_span!("program", carrier = label);
    let _entered = span.enter();
    tracing::info!("composing program");
    program(carrier)
}
