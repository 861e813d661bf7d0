//! Transition history.
//!
//! The machine appends one record per completed transition, self-transitions
//! included. History is bounded; once full, the oldest records are dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single completed transition.
///
/// # Example
///
/// ```rust
/// use actionfsm::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "locked",
///     to: "unlocked",
///     action: "enter-pin".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.action, "enter-pin");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<K> {
    /// The state being left
    pub from: K,
    /// The state being entered
    pub to: K,
    /// The action whose handler requested the transition
    pub action: String,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of transitions.
///
/// # Example
///
/// ```rust
/// use actionfsm::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition {
///     from: "start",
///     to: "middle",
///     action: "advance".to_string(),
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: "middle",
///     to: "end",
///     action: "advance".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&"start", &"middle", &"end"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<K> {
    transitions: VecDeque<StateTransition<K>>,
    limit: usize,
}

impl<K> StateHistory<K> {
    /// Create an empty history keeping at most `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    /// Append a transition, evicting the oldest records beyond the limit.
    pub fn record(&mut self, transition: StateTransition<K>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed, oldest first: the `from` of the first retained
    /// record, then the `to` of every record.
    pub fn get_path(&self) -> Vec<&K> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained transitions.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<K>> {
        self.transitions.iter()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<K>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn step(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            action: "advance".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::with_limit(4);
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::with_limit(4);
        history.record(step(TestState::Initial, TestState::Processing));
        history.record(step(TestState::Processing, TestState::Complete));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn limit_evicts_oldest_records() {
        let mut history = StateHistory::with_limit(2);
        history.record(step(TestState::Initial, TestState::Processing));
        history.record(step(TestState::Processing, TestState::Complete));
        history.record(step(TestState::Complete, TestState::Initial));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.transitions().next().map(|t| &t.from),
            Some(&TestState::Processing)
        );
        assert_eq!(history.last().map(|t| &t.to), Some(&TestState::Initial));
    }

    #[test]
    fn full_history_keeps_a_sliding_window() {
        let mut history = StateHistory::with_limit(3);
        for _ in 0..10 {
            history.record(step(TestState::Initial, TestState::Processing));
            history.record(step(TestState::Processing, TestState::Initial));
        }
        history.record(step(TestState::Initial, TestState::Complete));

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.get_path(),
            vec![
                &TestState::Initial,
                &TestState::Processing,
                &TestState::Initial,
                &TestState::Complete
            ]
        );
    }

    #[test]
    fn zero_limit_disables_recording() {
        let mut history = StateHistory::with_limit(0);
        history.record(step(TestState::Initial, TestState::Processing));

        assert!(history.is_empty());
        assert_eq!(history.limit(), 0);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::with_limit(4);
        history.record(step(TestState::Initial, TestState::Processing));

        std::thread::sleep(std::time::Duration::from_millis(10));

        history.record(step(TestState::Processing, TestState::Complete));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(4);
        history.record(step(TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert!(deserialized.transitions().eq(history.transitions()));
        assert_eq!(deserialized.limit(), 4);
    }
}
