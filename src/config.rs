//! Demonstration configuration.
//!
//! Configuration is read once at startup from environment variables (and a
//! `.env` file when present). Missing values fall back to defaults; invalid
//! values are reported with the offending key.
//!
//! # Environment Variables
//!
//! - `TAGLESS_CARRIERS`: comma-separated carriers to run, in order
//!   (default: `option,future,identity`)
//! - `TAGLESS_DATE_OFFSET`: day count for the date demo (default: 3)
//! - `TAGLESS_SKIP_DATES`: `true` to skip the date demo (default: false)

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Key selecting which carriers run.
pub const CARRIERS_KEY: &str = "TAGLESS_CARRIERS";
/// Key holding the date demo's day count.
pub const DATE_OFFSET_KEY: &str = "TAGLESS_DATE_OFFSET";
/// Key disabling the date demo.
pub const SKIP_DATES_KEY: &str = "TAGLESS_SKIP_DATES";

const DEFAULT_DATE_OFFSET: i64 = 3;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// The carriers a demonstration can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierKind {
    /// `Option`-backed carrier.
    Option,
    /// `AsyncIO`-backed carrier.
    Future,
    /// `Identity`-backed carrier.
    Identity,
}

impl CarrierKind {
    /// Every carrier, in the order the driver runs them by default.
    pub const ALL: [Self; 3] = [Self::Option, Self::Future, Self::Identity];

    /// Lowercase name used in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::Future => "future",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for CarrierKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for CarrierKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown carrier {value:?}"))
    }
}

/// Settings for one run of the demonstration binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Carriers to run the program against, in order.
    pub carriers: Vec<CarrierKind>,
    /// Day count for the date demo.
    pub date_offset: i64,
    /// Whether to skip the date demo.
    pub skip_dates: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            carriers: CarrierKind::ALL.to_vec(),
            date_offset: DEFAULT_DATE_OFFSET,
            skip_dates: false,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tagless::config::{CarrierKind, DemoConfig};
    ///
    /// let config = DemoConfig::from_lookup(|key| {
    ///     (key == "TAGLESS_CARRIERS").then(|| "identity".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.carriers, vec![CarrierKind::Identity]);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let carriers = match lookup(CARRIERS_KEY) {
            Some(raw) => parse_carriers(&raw)?,
            None => defaults.carriers,
        };
        let date_offset = parse_optional(&lookup, DATE_OFFSET_KEY, defaults.date_offset)?;
        let skip_dates = parse_optional(&lookup, SKIP_DATES_KEY, defaults.skip_dates)?;

        Ok(Self {
            carriers,
            date_offset,
            skip_dates,
        })
    }
}

fn parse_carriers(raw: &str) -> Result<Vec<CarrierKind>, ConfigError> {
    let carriers = raw
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<CarrierKind>, String>>()
        .map_err(|message| invalid(CARRIERS_KEY, message))?;
    if carriers.is_empty() {
        return Err(invalid(CARRIERS_KEY, "no carriers selected".to_string()));
    }
    Ok(carriers)
}

fn parse_optional<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|error: T::Err| invalid(key, error.to_string()))
    })
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}
