//! Lazily generated prime numbers and the prime calculation used by the
//! Option carrier.
//!
//! [`Primes`] is an unbounded iterator. Each new prime is found by trial
//! division against the primes it has produced so far, so the only state it
//! keeps is the primes already yielded. Consumers decide how far to go.
//!
//! # Examples
//!
//! ```rust
//! use tagless::control::Primes;
//!
//! let first: Vec<u64> = Primes::new().take(5).collect();
//! assert_eq!(first, vec![2, 3, 5, 7, 11]);
//! ```

use std::collections::VecDeque;
use std::num::ParseIntError;

use thiserror::Error;

/// The marker that precedes the threshold in a calculation sentence.
pub const THRESHOLD_MARKER: &str = "To ";

/// How many of the largest primes a calculation reports.
pub const LAST_PRIMES: usize = 10;

/// Errors from reading the threshold out of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    /// The sentence does not contain `"To "`.
    #[error("no threshold marker \"To \" in {sentence:?}")]
    MissingMarker {
        /// The sentence that was searched.
        sentence: String,
    },

    /// The text after the marker is not a 32-bit signed integer.
    #[error("threshold in {sentence:?} is not a 32-bit integer")]
    Malformed {
        /// The sentence that was parsed.
        sentence: String,
        /// Why the number did not parse.
        #[source]
        source: ParseIntError,
    },
}

/// An unbounded, lazily evaluated sequence of primes.
///
/// Restart the sequence by constructing a new `Primes`.
#[derive(Debug, Clone, Default)]
pub struct Primes {
    found: Vec<u64>,
}

impl Primes {
    /// Creates a sequence positioned before the first prime.
    pub const fn new() -> Self {
        Self { found: Vec::new() }
    }

    fn has_no_known_divisor(&self, candidate: u64) -> bool {
        self.found
            .iter()
            .take_while(|&&prime| prime.saturating_mul(prime) <= candidate)
            .all(|&prime| candidate % prime != 0)
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mut candidate = match self.found.last() {
            None => 2,
            Some(2) => 3,
            Some(&prime) => prime.checked_add(2)?,
        };
        while !self.has_no_known_divisor(candidate) {
            candidate = candidate.checked_add(2)?;
        }
        self.found.push(candidate);
        Some(candidate)
    }
}

/// Returns the last `count` primes that are `<= threshold`, ascending.
///
/// Fewer are returned when fewer exist; a threshold below 2 yields none.
///
/// ```rust
/// use tagless::control::last_primes_up_to;
///
/// assert_eq!(last_primes_up_to(20, 3), vec![13, 17, 19]);
/// assert_eq!(last_primes_up_to(1, 3), Vec::<u64>::new());
/// assert_eq!(last_primes_up_to(-5, 3), Vec::<u64>::new());
/// ```
pub fn last_primes_up_to(threshold: i32, count: usize) -> Vec<u64> {
    let Ok(limit) = u64::try_from(threshold) else {
        return Vec::new();
    };
    let mut window = VecDeque::with_capacity(count);
    for prime in Primes::new().take_while(|&prime| prime <= limit) {
        if window.len() == count {
            window.pop_front();
        }
        if count > 0 {
            window.push_back(prime);
        }
    }
    window.into()
}

/// Reads the integer that follows `"To "` in `sentence`.
///
/// # Errors
///
/// Returns [`ThresholdError::MissingMarker`] when the marker is absent and
/// [`ThresholdError::Malformed`] when the rest of the sentence is not an
/// integer in `i32` range. Negative thresholds are accepted.
pub fn parse_threshold(sentence: &str) -> Result<i32, ThresholdError> {
    let (_, number) =
        sentence
            .split_once(THRESHOLD_MARKER)
            .ok_or_else(|| ThresholdError::MissingMarker {
                sentence: sentence.to_string(),
            })?;
    number
        .trim()
        .parse()
        .map_err(|source| ThresholdError::Malformed {
            sentence: sentence.to_string(),
            source,
        })
}

/// Renders the last [`LAST_PRIMES`] primes up to the sentence's threshold.
///
/// ```rust
/// use tagless::control::describe_last_primes;
///
/// assert_eq!(describe_last_primes("getListOfPrimesTo 10").as_deref(), Ok("[2, 3, 5, 7]"));
/// ```
///
/// # Errors
///
/// Propagates [`parse_threshold`] failures.
pub fn describe_last_primes(sentence: &str) -> Result<String, ThresholdError> {
    let threshold = parse_threshold(sentence)?;
    Ok(format!("{:?}", last_primes_up_to(threshold, LAST_PRIMES)))
}
