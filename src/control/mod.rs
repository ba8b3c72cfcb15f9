//! Control structures.
//!
//! - [`Primes`]: a lazily evaluated, unbounded sequence of primes
//!
//! # Examples
//!
//! ```rust
//! use tagless::control::{Primes, last_primes_up_to};
//!
//! let below_ten: Vec<u64> = Primes::new().take_while(|&p| p < 10).collect();
//! assert_eq!(below_ten, vec![2, 3, 5, 7]);
//! assert_eq!(last_primes_up_to(10, 2), vec![5, 7]);
//! ```

mod primes;

pub use primes::{
    LAST_PRIMES, Primes, THRESHOLD_MARKER, ThresholdError, describe_last_primes,
    last_primes_up_to, parse_threshold,
};
