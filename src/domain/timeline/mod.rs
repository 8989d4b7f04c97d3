//! Timeline — a sparse, append-only record of a value's state over time.

pub mod convert;
pub mod wire;

use serde::Serialize;
use std::fmt;

/// A value observed at a service timestamp (nanoseconds since epoch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedValue<T> {
    pub timestamp: u64,
    pub data: T,
}

/// A value's current state plus the ordered history of its prior states.
///
/// Invariants, checked at construction:
/// - `history` is sorted ascending by timestamp;
/// - every history timestamp is `<=` the current timestamp.
///
/// An empty history means the current state is also the first state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline<T> {
    current: TimedValue<T>,
    history: Vec<TimedValue<T>>,
}

impl<T> Timeline<T> {
    /// Build a timeline, validating the ordering invariants.
    pub fn new(current: TimedValue<T>, history: Vec<TimedValue<T>>) -> Result<Self, TimelineError> {
        for (index, pair) in history.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(TimelineError::HistoryOutOfOrder { index: index + 1 });
            }
        }
        if let Some(last) = history.last() {
            if last.timestamp > current.timestamp {
                return Err(TimelineError::HistoryAheadOfCurrent {
                    timestamp: last.timestamp,
                    current: current.timestamp,
                });
            }
        }
        Ok(Self { current, history })
    }

    /// A timeline with a single known state.
    pub fn of(current: TimedValue<T>) -> Self {
        Self {
            current,
            history: Vec::new(),
        }
    }

    /// The latest recorded state.
    pub fn current(&self) -> &TimedValue<T> {
        &self.current
    }

    /// The oldest recorded state: the head of history, or the current state
    /// when no history exists.
    pub fn first(&self) -> &TimedValue<T> {
        self.history.first().unwrap_or(&self.current)
    }

    pub fn history(&self) -> &[TimedValue<T>] {
        &self.history
    }

    /// All recorded states in ascending timestamp order, current last.
    pub fn iter(&self) -> impl Iterator<Item = &TimedValue<T>> {
        self.history.iter().chain(std::iter::once(&self.current))
    }

    /// Number of recorded states, current included.
    pub fn len(&self) -> usize {
        self.history.len() + 1
    }

    /// Whether the value has ever changed since its first state.
    pub fn is_extended(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Errors when validating a timeline snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    HistoryOutOfOrder { index: usize },
    HistoryAheadOfCurrent { timestamp: u64, current: u64 },
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineError::HistoryOutOfOrder { index } => {
                write!(f, "History entry {} is older than its predecessor", index)
            }
            TimelineError::HistoryAheadOfCurrent { timestamp, current } => {
                write!(
                    f,
                    "History timestamp {} is ahead of the current timestamp {}",
                    timestamp, current
                )
            }
        }
    }
}

impl std::error::Error for TimelineError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(timestamp: u64, data: u64) -> TimedValue<u64> {
        TimedValue { timestamp, data }
    }

    #[test]
    fn test_single_state() {
        let timeline = Timeline::of(tv(100, 7));
        assert_eq!(timeline.current().data, 7);
        assert_eq!(timeline.first().data, 7);
        assert_eq!(timeline.len(), 1);
        assert!(!timeline.is_extended());
    }

    #[test]
    fn test_first_is_oldest_history_entry() {
        let timeline = Timeline::new(tv(300, 30), vec![tv(100, 10), tv(200, 20)]).unwrap();
        assert_eq!(timeline.first().data, 10);
        assert_eq!(timeline.current().data, 30);
        assert!(timeline.is_extended());
    }

    #[test]
    fn test_iter_ascending_current_last() {
        let timeline = Timeline::new(tv(300, 30), vec![tv(100, 10), tv(200, 20)]).unwrap();
        let values: Vec<u64> = timeline.iter().map(|tv| tv.data).collect();
        assert_eq!(values, [10, 20, 30]);
    }

    #[test]
    fn test_out_of_order_history_rejected() {
        let err = Timeline::new(tv(300, 30), vec![tv(200, 20), tv(100, 10)]).unwrap_err();
        assert_eq!(err, TimelineError::HistoryOutOfOrder { index: 1 });
    }

    #[test]
    fn test_history_ahead_of_current_rejected() {
        let err = Timeline::new(tv(100, 1), vec![tv(200, 2)]).unwrap_err();
        assert_eq!(
            err,
            TimelineError::HistoryAheadOfCurrent {
                timestamp: 200,
                current: 100
            }
        );
    }

    #[test]
    fn test_equal_timestamps_allowed() {
        // The service may record several states in the same tick.
        assert!(Timeline::new(tv(100, 2), vec![tv(100, 1)]).is_ok());
    }
}
