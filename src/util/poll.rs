//! Bounded polling with optional backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::stop::PollMode;
use crate::types::{PollOutcome, PollingOptions};

/// Why a polling run ended. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    ConditionMet,
    FirstSuccess,
    ProducerError,
    Timeout,
    RetryLimit,
}

impl StopReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::ConditionMet => "condition_met",
            Self::FirstSuccess => "first_success",
            Self::ProducerError => "producer_error",
            Self::Timeout => "timeout",
            Self::RetryLimit => "retry_limit",
        }
    }
}

/// Bookkeeping shared by the async and blocking pollers.
pub(crate) struct PollState<T, E> {
    pub attempts: u32,
    last_value: Option<T>,
    last_error: Option<E>,
}

impl<T, E: Display> PollState<T, E> {
    pub fn new() -> Self {
        Self {
            attempts: 0,
            last_value: None,
            last_error: None,
        }
    }

    pub fn begin_attempt(&mut self) {
        self.attempts += 1;
        tracing::trace!(attempt = self.attempts, "Polling attempt");
    }

    pub fn record_value(&mut self, value: T) {
        self.last_value = Some(value);
        self.last_error = None;
    }

    pub fn record_error(&mut self, error: E) {
        self.last_error = Some(error);
    }

    /// Log the pending error before sleeping, if the last attempt failed.
    pub fn log_retry(&self, delay: Duration) {
        if let Some(error) = &self.last_error {
            tracing::warn!(
                attempt = self.attempts,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Retrying after error"
            );
        }
    }

    /// A pending error wins over any earlier value; otherwise succeed with
    /// whatever was last produced.
    pub fn finish(self, reason: StopReason) -> PollOutcome<T, E> {
        tracing::debug!(
            attempts = self.attempts,
            reason = reason.as_str(),
            failed = self.last_error.is_some(),
            "Polling finished"
        );
        match self.last_error {
            Some(error) => PollOutcome::Failure {
                error,
                attempts: self.attempts,
            },
            None => PollOutcome::Success {
                value: self.last_value,
                attempts: self.attempts,
            },
        }
    }

    /// Handle one settled attempt. Returns the outcome if polling should end.
    pub fn settle(&mut self, result: Result<T, E>, mode: &PollMode<T>) -> Option<PollOutcome<T, E>> {
        match result {
            Ok(value) => {
                let accepted = mode.accepts(&value);
                self.record_value(value);
                if !accepted {
                    return None;
                }
                let reason = if mode.retries_errors() {
                    StopReason::FirstSuccess
                } else {
                    StopReason::ConditionMet
                };
                tracing::debug!(attempts = self.attempts, reason = reason.as_str(), "Polling finished");
                Some(PollOutcome::Success {
                    value: self.last_value.take(),
                    attempts: self.attempts,
                })
            }
            Err(error) if mode.retries_errors() => {
                self.record_error(error);
                None
            }
            Err(error) => {
                tracing::debug!(
                    attempts = self.attempts,
                    reason = StopReason::ProducerError.as_str(),
                    error = %error,
                    "Polling finished"
                );
                Some(PollOutcome::Failure {
                    error,
                    attempts: self.attempts,
                })
            }
        }
    }
}

/// Next delay after a non-terminal attempt.
///
/// Whole milliseconds of `current * factor`, truncated toward zero. Products
/// that are negative or NaN give zero; products past `u64::MAX` ms saturate.
pub fn next_interval(current: Duration, factor: f64) -> Duration {
    let millis = current.as_millis() as f64 * factor;
    Duration::from_millis(millis as u64)
}

/// Invoke `producer` until `mode` is satisfied or the budgets in `options`
/// run out.
///
/// The timeout is checked before each attempt and again after it settles;
/// it never interrupts an attempt that is already running. Elapsed time is
/// read from the tokio clock.
///
/// ```no_run
/// use std::time::Duration;
/// use pollkit::prelude::*;
///
/// # async fn example() {
/// let options = PollingOptions::new(Duration::from_millis(100), Duration::from_secs(5));
/// let outcome = poll(
///     || async { Ok::<_, String>(42) },
///     PollMode::until(|v: &i32| *v == 42),
///     &options,
/// )
/// .await;
/// assert_eq!(outcome.value(), Some(&42));
/// # }
/// ```
pub async fn poll<T, E, F, Fut>(
    mut producer: F,
    mode: PollMode<T>,
    options: &PollingOptions,
) -> PollOutcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let start = Instant::now();
    let mut state = PollState::new();
    let mut interval = options.interval;

    while options.allows_attempt(state.attempts) {
        if start.elapsed() >= options.timeout {
            return state.finish(StopReason::Timeout);
        }

        state.begin_attempt();
        let result = producer().await;
        if let Some(outcome) = state.settle(result, &mode) {
            return outcome;
        }

        if start.elapsed() >= options.timeout {
            return state.finish(StopReason::Timeout);
        }

        if options.allows_attempt(state.attempts) {
            state.log_retry(interval);
            tokio::time::sleep(interval).await;
            interval = next_interval(interval, options.backoff_factor);
        }
    }

    state.finish(StopReason::RetryLimit)
}
