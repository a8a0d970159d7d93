//! Convenience re-exports for common use.

pub use crate::config::{PollingConfig, PollingPreset};
pub use crate::error::{PollkitError, Result};
pub use crate::stop::{PollMode, StopCondition};
pub use crate::types::{PollOutcome, PollingOptions};
pub use crate::util::{memoize, memoize_with_ttl, poll, poll_blocking, Memoized};
