//! Monad type class - sequencing computations within a carrier.
//!
//! Unlike a method-style monad where `flat_map` lives on the container, this
//! `Monad` is an *instance*: a value implementing it knows how to sequence
//! containers of its brand. Generic code receives the instance explicitly and
//! never names the concrete container.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! m.chain(m.lift(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.chain(fa, |a| m.lift(a)) == fa
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.chain(m.chain(fa, f), g) == m.chain(fa, |x| m.chain(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tagless::typeclass::{Kind, Monad, Value};
//!
//! #[derive(Clone)]
//! struct Maybe;
//!
//! impl Kind for Maybe {
//!     type Of<A> = Option<A>;
//! }
//!
//! impl Monad for Maybe {
//!     fn chain<A, B, F>(&self, fa: Option<A>, function: F) -> Option<B>
//!     where
//!         A: Value,
//!         B: Value,
//!         F: FnOnce(A) -> Option<B> + Send + 'static,
//!     {
//!         fa.and_then(function)
//!     }
//!
//!     fn lift<A: Value>(&self, value: A) -> Option<A> {
//!         Some(value)
//!     }
//! }
//!
//! let doubled = Maybe.chain(Some(21), |n: i32| Some(n * 2));
//! assert_eq!(doubled, Some(42));
//! ```

use super::higher::{Kind, Value};

/// A type class for brands whose containers can be sequenced.
///
/// `chain` runs a computation that depends on the result of a previous one;
/// `lift` wraps a plain value with no additional effect.
pub trait Monad: Kind {
    /// Sequences `fa` with a continuation that depends on its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagless::carrier::IdentityCarrier;
    /// use tagless::effect::Diagnostics;
    /// use tagless::typeclass::{Identity, Monad};
    ///
    /// let carrier = IdentityCarrier::new(Diagnostics::captured());
    /// let result = carrier.chain(Identity(10), |n: i32| Identity(n + 5));
    /// assert_eq!(result, Identity(15));
    /// ```
    fn chain<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Value,
        B: Value,
        F: FnOnce(A) -> Self::Of<B> + Send + 'static;

    /// Wraps a plain value in the minimal context of this carrier.
    fn lift<A: Value>(&self, value: A) -> Self::Of<A>;

    /// Transforms the wrapped value with a plain function.
    ///
    /// Derived from `chain` and `lift`.
    fn fmap<A, B, G>(&self, fa: Self::Of<A>, function: G) -> Self::Of<B>
    where
        Self: Clone + Send + 'static,
        A: Value,
        B: Value,
        G: FnOnce(A) -> B + Send + 'static,
    {
        let lifter = self.clone();
        self.chain::<A, B, _>(fa, move |value| lifter.lift(function(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone)]
    struct Maybe;

    impl Kind for Maybe {
        type Of<A> = Option<A>;
    }

    impl Monad for Maybe {
        fn chain<A, B, F>(&self, fa: Option<A>, function: F) -> Option<B>
        where
            A: Value,
            B: Value,
            F: FnOnce(A) -> Option<B> + Send + 'static,
        {
            fa.and_then(function)
        }

        fn lift<A: Value>(&self, value: A) -> Option<A> {
            Some(value)
        }
    }

    #[rstest]
    #[case(Some(5), Some(10))]
    #[case(None, None)]
    fn chain_applies_continuation_when_present(
        #[case] input: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(Maybe.chain(input, |n: i32| Some(n * 2)), expected);
    }

    #[rstest]
    fn chain_short_circuits_on_absence() {
        let result: Option<i32> = Maybe.chain(Some(1), |_: i32| None::<i32>);
        assert_eq!(Maybe.chain(result, |n: i32| Some(n + 1)), None);
    }

    #[rstest]
    fn lift_wraps_value() {
        assert_eq!(Maybe.lift("x"), Some("x"));
    }

    #[rstest]
    #[case(Some(3), Some("3".to_string()))]
    #[case(None, None)]
    fn fmap_is_derived_from_chain_and_lift(
        #[case] input: Option<i32>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(Maybe.fmap(input, |n: i32| n.to_string()), expected);
    }
}
