//! Polling options.

use std::time::Duration;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::config::PollingConfig;
use crate::error::{PollkitError, Result};

/// Budgets and pacing for one `poll` call.
///
/// Durations serialize as whole milliseconds under `interval_ms` and
/// `timeout_ms`.
///
/// ```
/// use std::time::Duration;
/// use pollkit::types::PollingOptions;
///
/// let options = PollingOptions::builder()
///     .interval(Duration::from_millis(250))
///     .timeout(Duration::from_secs(10))
///     .backoff_factor(2.0)
///     .retry_limit(8)
///     .build();
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct PollingOptions {
    /// Delay between the first and second attempt.
    #[serde(rename = "interval_ms", with = "millis")]
    pub interval: Duration,
    /// Wall-clock budget measured from the start of polling.
    #[serde(rename = "timeout_ms", with = "millis")]
    pub timeout: Duration,
    /// Multiplier applied to the delay after each non-terminal attempt.
    #[builder(default = DEFAULT_BACKOFF_FACTOR)]
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,
    /// Maximum number of attempts. `None` leaves the timeout as the only bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_limit: Option<u32>,
}

/// Backoff factor used when none is given (constant delay).
pub const DEFAULT_BACKOFF_FACTOR: f64 = 1.0;

fn default_backoff_factor() -> f64 {
    DEFAULT_BACKOFF_FACTOR
}

impl PollingOptions {
    /// Constant-interval options with no attempt ceiling.
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval,
            timeout,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            retry_limit: None,
        }
    }

    pub fn with_backoff_factor(mut self, backoff_factor: f64) -> Self {
        self.backoff_factor = backoff_factor;
        self
    }

    pub fn with_retry_limit(mut self, retry_limit: Option<u32>) -> Self {
        self.retry_limit = retry_limit;
        self
    }

    /// Check the invariants the type system does not enforce.
    pub fn validate(&self) -> Result<()> {
        if !self.backoff_factor.is_finite() {
            return Err(PollkitError::InvalidOptions(format!(
                "backoff_factor must be finite, got {}",
                self.backoff_factor
            )));
        }
        if self.backoff_factor < 0.0 {
            return Err(PollkitError::InvalidOptions(format!(
                "backoff_factor must be >= 0, got {}",
                self.backoff_factor
            )));
        }
        Ok(())
    }

    /// Whether another attempt fits under the retry ceiling.
    pub fn allows_attempt(&self, attempts_so_far: u32) -> bool {
        self.retry_limit.map_or(true, |limit| attempts_so_far < limit)
    }

    /// Parse options from a TOML document.
    ///
    /// Accepts either explicit fields or a `preset` name; see
    /// [`PollingConfig`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        PollingConfig::from_toml_str(source)?.into_options()
    }
}

/// Serde adapter storing a `Duration` as integer milliseconds.
pub(crate) mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
