//! Conversion: WireTimeline → Timeline (TryFrom + ordering validation).

use super::wire::{WireTimedValue, WireTimeline};
use super::{TimedValue, Timeline, TimelineError};

impl<T> From<WireTimedValue<T>> for TimedValue<T> {
    fn from(source: WireTimedValue<T>) -> Self {
        Self {
            timestamp: source.timestamp,
            data: source.data,
        }
    }
}

impl<T> TryFrom<WireTimeline<T>> for Timeline<T> {
    type Error = TimelineError;

    fn try_from(source: WireTimeline<T>) -> Result<Self, Self::Error> {
        Timeline::new(
            source.current.into(),
            source.history.into_iter().map(Into::into).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        let json = r#"{
            "current": { "timestamp": 300, "data": 30 },
            "history": [
                { "timestamp": 100, "data": 10 },
                { "timestamp": 200, "data": 20 }
            ]
        }"#;
        let wire: WireTimeline<u64> = serde_json::from_str(json).unwrap();
        let timeline = Timeline::try_from(wire).unwrap();
        assert_eq!(timeline.first().data, 10);
        assert_eq!(timeline.current().data, 30);
    }

    #[test]
    fn test_missing_history_defaults_empty() {
        let json = r#"{ "current": { "timestamp": 300, "data": 30 } }"#;
        let wire: WireTimeline<u64> = serde_json::from_str(json).unwrap();
        let timeline = Timeline::try_from(wire).unwrap();
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_unordered_history_rejected() {
        let json = r#"{
            "current": { "timestamp": 300, "data": 30 },
            "history": [
                { "timestamp": 200, "data": 20 },
                { "timestamp": 100, "data": 10 }
            ]
        }"#;
        let wire: WireTimeline<u64> = serde_json::from_str(json).unwrap();
        let err = Timeline::try_from(wire).unwrap_err();
        assert_eq!(err, TimelineError::HistoryOutOfOrder { index: 1 });
    }
}
