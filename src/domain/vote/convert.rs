//! Conversion: WireVote → Vote (TryFrom + validation).
//!
//! The aggregate schema is resolved here, once, per timeline entry; nothing
//! past this boundary branches on schema shape.

use super::wire::WireVote;
use super::Vote;
use crate::domain::aggregate::{Aggregate, AggregateValidationError};
use crate::domain::timeline::{TimedValue, Timeline, TimelineError};
use crate::shared::VoteId;
use std::fmt;

/// Errors when validating a vote snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteValidationError {
    Aggregate(AggregateValidationError),
    Timeline(TimelineError),
}

impl fmt::Display for VoteValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteValidationError::Aggregate(err) => write!(f, "Aggregate: {}", err),
            VoteValidationError::Timeline(err) => write!(f, "Aggregate timeline: {}", err),
        }
    }
}

impl std::error::Error for VoteValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VoteValidationError::Aggregate(err) => Some(err),
            VoteValidationError::Timeline(err) => Some(err),
        }
    }
}

impl TryFrom<WireVote> for Vote {
    type Error = VoteValidationError;

    fn try_from(source: WireVote) -> Result<Self, Self::Error> {
        let current = TimedValue {
            timestamp: source.aggregate.current.timestamp,
            data: Aggregate::try_from(source.aggregate.current.data)
                .map_err(VoteValidationError::Aggregate)?,
        };

        let mut history = Vec::with_capacity(source.aggregate.history.len());
        for entry in source.aggregate.history {
            history.push(TimedValue {
                timestamp: entry.timestamp,
                data: Aggregate::try_from(entry.data).map_err(VoteValidationError::Aggregate)?,
            });
        }

        let aggregate = Timeline::new(current, history).map_err(VoteValidationError::Timeline)?;

        Ok(Vote {
            id: VoteId::new(source.vote_id),
            text: source.text,
            date: source.date,
            aggregate,
        })
    }
}
