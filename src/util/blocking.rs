//! Polling for synchronous producers.

use std::fmt::Display;
use std::time::Instant;

use super::poll::{next_interval, PollState, StopReason};
use crate::stop::PollMode;
use crate::types::{PollOutcome, PollingOptions};

/// Blocking twin of [`poll`](super::poll::poll).
///
/// Same termination rules; sleeps the current thread between attempts and
/// measures elapsed time with `std::time::Instant`. Do not call from inside
/// an async task.
pub fn poll_blocking<T, E, F>(
    mut producer: F,
    mode: PollMode<T>,
    options: &PollingOptions,
) -> PollOutcome<T, E>
where
    F: FnMut() -> Result<T, E>,
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
        if let Some(outcome) = state.settle(producer(), &mode) {
            return outcome;
        }

        if start.elapsed() >= options.timeout {
            return state.finish(StopReason::Timeout);
        }

        if options.allows_attempt(state.attempts) {
            state.log_retry(interval);
            std::thread::sleep(interval);
            interval = next_interval(interval, options.backoff_factor);
        }
    }

    state.finish(StopReason::RetryLimit)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn fast(limit: u32) -> PollingOptions {
        PollingOptions::new(Duration::from_millis(1), Duration::from_secs(5))
            .with_retry_limit(Some(limit))
    }

    #[test]
    fn honours_condition() {
        let mut calls = 0;
        let outcome = poll_blocking(
            || {
                calls += 1;
                Ok::<_, String>(calls)
            },
            PollMode::until(|v: &i32| *v == 3),
            &fast(10),
        );
        assert_eq!(
            outcome,
            PollOutcome::Success {
                value: Some(3),
                attempts: 3
            }
        );
    }

    #[test]
    fn retries_errors_until_success() {
        let mut calls = 0;
        let outcome = poll_blocking(
            || {
                calls += 1;
                if calls < 3 {
                    Err(format!("attempt {calls} failed"))
                } else {
                    Ok("done")
                }
            },
            PollMode::StopOnFirstSuccess,
            &fast(5),
        );
        assert_eq!(
            outcome,
            PollOutcome::Success {
                value: Some("done"),
                attempts: 3
            }
        );
    }

    #[test]
    fn surfaces_last_error_when_limit_is_hit() {
        let mut calls = 0;
        let outcome: PollOutcome<(), String> = poll_blocking(
            || {
                calls += 1;
                Err(format!("attempt {calls} failed"))
            },
            PollMode::StopOnFirstSuccess,
            &fast(4),
        );
        assert_eq!(
            outcome,
            PollOutcome::Failure {
                error: "attempt 4 failed".to_string(),
                attempts: 4
            }
        );
    }

    #[test]
    fn zero_timeout_makes_no_attempts() {
        let mut calls = 0;
        let options = PollingOptions::new(Duration::from_millis(1), Duration::ZERO);
        let outcome: PollOutcome<(), String> = poll_blocking(
            || {
                calls += 1;
                Ok(())
            },
            PollMode::StopOnFirstSuccess,
            &options,
        );
        assert_eq!(outcome, PollOutcome::Success { value: None, attempts: 0 });
        assert_eq!(calls, 0);
    }
}
