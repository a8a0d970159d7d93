//! Stop conditions and polling modes.

use std::fmt;

/// Predicate deciding whether a successfully produced value ends polling.
///
/// Implemented for every `Fn(&T) -> bool + Send + Sync` closure.
pub trait StopCondition<T>: Send + Sync {
    fn should_stop(&self, value: &T) -> bool;
}

impl<T, F> StopCondition<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn should_stop(&self, value: &T) -> bool {
        self(value)
    }
}

/// Stop once the produced value equals a target.
pub struct EqualsStop<T> {
    target: T,
}

impl<T> EqualsStop<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }
}

impl<T: PartialEq + Send + Sync> StopCondition<T> for EqualsStop<T> {
    fn should_stop(&self, value: &T) -> bool {
        *value == self.target
    }
}

/// Stop when any of the inner conditions holds.
pub struct AnyStop<T> {
    conditions: Vec<Box<dyn StopCondition<T>>>,
}

impl<T> AnyStop<T> {
    pub fn new(conditions: Vec<Box<dyn StopCondition<T>>>) -> Self {
        Self { conditions }
    }
}

impl<T> StopCondition<T> for AnyStop<T> {
    fn should_stop(&self, value: &T) -> bool {
        self.conditions.iter().any(|c| c.should_stop(value))
    }
}

/// Which termination policy a `poll` call follows.
///
/// The two policies are deliberately exclusive:
///
/// - `StopOnFirstSuccess` retries producer errors and ends on the first `Ok`.
/// - `StopOnCondition` retries values the condition rejects, and ends on the
///   first producer error.
///
/// There is no mode that both checks a condition and tolerates errors. A
/// caller needing that can fold the condition into the producer, turning a
/// rejected value into an `Err`, and use `StopOnFirstSuccess`.
pub enum PollMode<T> {
    StopOnFirstSuccess,
    StopOnCondition(Box<dyn StopCondition<T>>),
}

impl<T> PollMode<T> {
    /// Condition mode from a closure.
    pub fn until<F>(condition: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::StopOnCondition(Box::new(condition))
    }

    /// Condition mode from any [`StopCondition`] implementor.
    pub fn with_condition(condition: impl StopCondition<T> + 'static) -> Self {
        Self::StopOnCondition(Box::new(condition))
    }

    /// Whether producer errors are recorded and retried rather than surfaced.
    pub fn retries_errors(&self) -> bool {
        matches!(self, Self::StopOnFirstSuccess)
    }

    /// Whether a successfully produced value ends polling.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::StopOnFirstSuccess => true,
            Self::StopOnCondition(condition) => condition.should_stop(value),
        }
    }
}

impl<T> Default for PollMode<T> {
    fn default() -> Self {
        Self::StopOnFirstSuccess
    }
}

impl<T> fmt::Debug for PollMode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopOnFirstSuccess => f.write_str("StopOnFirstSuccess"),
            Self::StopOnCondition(_) => f.write_str("StopOnCondition(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_success_accepts_everything() {
        let mode: PollMode<i32> = PollMode::StopOnFirstSuccess;
        assert!(mode.retries_errors());
        assert!(mode.accepts(&-1));
    }

    #[test]
    fn closure_condition() {
        let mode = PollMode::until(|v: &i32| *v >= 3);
        assert!(!mode.retries_errors());
        assert!(!mode.accepts(&2));
        assert!(mode.accepts(&3));
    }

    #[test]
    fn equals_stop() {
        let mode = PollMode::with_condition(EqualsStop::new("ready".to_string()));
        assert!(!mode.accepts(&"pending".to_string()));
        assert!(mode.accepts(&"ready".to_string()));
    }

    #[test]
    fn any_stop_matches_either() {
        let conditions: Vec<Box<dyn StopCondition<i32>>> = vec![
            Box::new(EqualsStop::new(0)),
            Box::new(|v: &i32| *v > 100),
        ];
        let any = AnyStop::new(conditions);
        assert!(any.should_stop(&0));
        assert!(any.should_stop(&101));
        assert!(!any.should_stop(&50));
    }

    #[test]
    fn debug_hides_condition() {
        let mode = PollMode::until(|_: &u8| true);
        assert_eq!(format!("{mode:?}"), "StopOnCondition(..)");
    }
}
