//! Named polling profiles.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{PollkitError, Result};
use crate::types::PollingOptions;

/// A fixed polling profile.
///
/// | preset               | timeout | interval | backoff | attempts |
/// |----------------------|---------|----------|---------|----------|
/// | `quick`              | 5 s     | 100 ms   | 1.0     | 50       |
/// | `standard`           | 30 s    | 1 s      | 1.0     | 30       |
/// | `exponentialBackoff` | 60 s    | 500 ms   | 1.5     | 20       |
/// | `patient`            | 300 s   | 5 s      | 1.0     | 60       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PollingPreset {
    Quick,
    Standard,
    ExponentialBackoff,
    Patient,
}

impl PollingPreset {
    pub const ALL: [Self; 4] = [
        Self::Quick,
        Self::Standard,
        Self::ExponentialBackoff,
        Self::Patient,
    ];

    /// Parse a preset name, mapping failures to [`PollkitError::UnknownPreset`].
    pub fn parse(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| PollkitError::UnknownPreset(name.to_string()))
    }

    pub fn default_timeout(self) -> Duration {
        match self {
            Self::Quick => Duration::from_millis(5_000),
            Self::Standard => Duration::from_millis(30_000),
            Self::ExponentialBackoff => Duration::from_millis(60_000),
            Self::Patient => Duration::from_millis(300_000),
        }
    }

    /// Options for this profile, with the default timeout unless overridden.
    pub fn options(self, timeout: Option<Duration>) -> PollingOptions {
        let (interval_ms, backoff_factor, retry_limit) = match self {
            Self::Quick => (100, 1.0, 50),
            Self::Standard => (1_000, 1.0, 30),
            Self::ExponentialBackoff => (500, 1.5, 20),
            Self::Patient => (5_000, 1.0, 60),
        };
        PollingOptions {
            interval: Duration::from_millis(interval_ms),
            timeout: timeout.unwrap_or_else(|| self.default_timeout()),
            backoff_factor,
            retry_limit: Some(retry_limit),
        }
    }
}

/// Fast checks against something expected within seconds.
pub fn quick(timeout: Option<Duration>) -> PollingOptions {
    PollingPreset::Quick.options(timeout)
}

pub fn standard(timeout: Option<Duration>) -> PollingOptions {
    PollingPreset::Standard.options(timeout)
}

/// Starts at 500 ms and grows by half each attempt.
pub fn exponential_backoff(timeout: Option<Duration>) -> PollingOptions {
    PollingPreset::ExponentialBackoff.options(timeout)
}

/// Slow background work measured in minutes.
pub fn patient(timeout: Option<Duration>) -> PollingOptions {
    PollingPreset::Patient.options(timeout)
}
