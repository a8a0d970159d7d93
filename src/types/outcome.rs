//! Result of a polling run.

/// How a `poll` call settled.
///
/// `attempts` counts completed producer invocations. A `Success` whose
/// `value` is `None` means polling ran out of budget before any attempt
/// produced a value (for example a zero retry limit or an already elapsed
/// timeout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T, E> {
    Success { value: Option<T>, attempts: u32 },
    Failure { error: E, attempts: u32 },
}

impl<T, E> PollOutcome<T, E> {
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Success { attempts, .. } | Self::Failure { attempts, .. } => *attempts,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The last value produced, if the outcome is a success that has one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => value.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }

    /// Drop the attempt count and convert into a plain `Result`.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Success { value, .. } => Ok(value),
            Self::Failure { error, .. } => Err(error),
        }
    }

    /// Convert the error type, e.g. into [`PollkitError`](crate::error::PollkitError).
    pub fn map_err<E2>(self, f: impl FnOnce(E) -> E2) -> PollOutcome<T, E2> {
        match self {
            Self::Success { value, attempts } => PollOutcome::Success { value, attempts },
            Self::Failure { error, attempts } => PollOutcome::Failure {
                error: f(error),
                attempts,
            },
        }
    }
}
