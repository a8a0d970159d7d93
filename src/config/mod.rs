//! Configuration: named presets and TOML loading (layered: explicit fields > preset).

pub mod presets;

pub use presets::{exponential_backoff, patient, quick, standard, PollingPreset};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PollkitError, Result};
use crate::types::PollingOptions;

/// Polling options as written in a config file.
///
/// Either name a `preset` and optionally override some of its fields, or give
/// `interval_ms` and `timeout_ms` explicitly:
///
/// ```toml
/// preset = "exponentialBackoff"
/// timeout_ms = 10000
/// ```
///
/// ```toml
/// interval_ms = 250
/// timeout_ms = 5000
/// backoff_factor = 2.0
/// retry_limit = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PollingPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backoff_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_limit: Option<u32>,
}

impl PollingConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve into validated options.
    pub fn into_options(self) -> Result<PollingOptions> {
        let timeout = self.timeout_ms.map(Duration::from_millis);

        let mut options = match self.preset {
            Some(preset) => preset.options(timeout),
            None => {
                let interval = self.interval_ms.ok_or_else(|| {
                    PollkitError::InvalidOptions(
                        "interval_ms is required when no preset is named".to_string(),
                    )
                })?;
                let timeout = timeout.ok_or_else(|| {
                    PollkitError::InvalidOptions(
                        "timeout_ms is required when no preset is named".to_string(),
                    )
                })?;
                PollingOptions::new(Duration::from_millis(interval), timeout)
            }
        };

        if let Some(interval) = self.interval_ms {
            options.interval = Duration::from_millis(interval);
        }
        if let Some(backoff_factor) = self.backoff_factor {
            options.backoff_factor = backoff_factor;
        }
        if self.retry_limit.is_some() {
            options.retry_limit = self.retry_limit;
        }

        options.validate()?;
        Ok(options)
    }
}

impl From<PollingPreset> for PollingConfig {
    fn from(preset: PollingPreset) -> Self {
        Self {
            preset: Some(preset),
            ..Default::default()
        }
    }
}
