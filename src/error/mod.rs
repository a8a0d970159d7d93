//! Error types for pollkit.

use std::fmt;

use thiserror::Error;

/// Primary error type for pollkit operations.
///
/// The poller itself never produces one of these: producer failures travel
/// through [`PollOutcome`](crate::types::PollOutcome) as the caller's own
/// error type, and an elapsed timeout is reported as an outcome rather than
/// an error. `Producer` exists for callers whose producers fail with values
/// that are not errors in their own right (plain strings, status codes) and
/// want a single error type to carry them.
#[derive(Error, Debug)]
pub enum PollkitError {
    #[error("Invalid polling options: {0}")]
    InvalidOptions(String),

    #[error("Unknown polling preset: {0}")]
    UnknownPreset(String),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Producer error: {message}")]
    Producer {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PollkitError {
    /// Wrap an arbitrary displayable fault, keeping only its string form.
    pub fn producer(fault: impl fmt::Display) -> Self {
        Self::Producer {
            message: fault.to_string(),
            source: None,
        }
    }

    /// Wrap a real error, keeping it as the source.
    pub fn from_source(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Producer {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Whether this error came from a caller-supplied producer.
    pub fn is_producer_fault(&self) -> bool {
        matches!(self, Self::Producer { .. })
    }
}

impl From<String> for PollkitError {
    fn from(message: String) -> Self {
        Self::producer(message)
    }
}

impl From<&str> for PollkitError {
    fn from(message: &str) -> Self {
        Self::producer(message)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PollkitError>;
