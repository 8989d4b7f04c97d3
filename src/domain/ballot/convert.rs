//! Conversion: WireQueriedBallot → Ballot (TryFrom + validation).

use super::wire::{WireBallotType, WireChoice, WireQueriedBallot};
use super::Ballot;
use crate::domain::timeline::{Timeline, TimelineError};
use crate::shared::{BallotId, Side, VoteId};
use std::fmt;

/// Errors when validating a queried ballot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallotValidationError {
    /// The duration timeline violates its ordering invariant.
    Duration(TimelineError),
}

impl fmt::Display for BallotValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallotValidationError::Duration(err) => write!(f, "Duration timeline: {}", err),
        }
    }
}

impl std::error::Error for BallotValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BallotValidationError::Duration(err) => Some(err),
        }
    }
}

impl From<WireChoice> for Side {
    fn from(choice: WireChoice) -> Self {
        match choice {
            WireChoice::Yes(()) => Side::Yes,
            WireChoice::No(()) => Side::No,
        }
    }
}

impl TryFrom<WireQueriedBallot> for Ballot {
    type Error = BallotValidationError;

    fn try_from(source: WireQueriedBallot) -> Result<Self, Self::Error> {
        let WireBallotType::YesNo(inner) = source.ballot;

        let duration =
            Timeline::try_from(inner.duration_ns).map_err(BallotValidationError::Duration)?;

        Ok(Ballot {
            id: BallotId::new(source.ballot_id),
            vote_id: VoteId::new(source.vote_id),
            timestamp: inner.timestamp,
            side: inner.choice.into(),
            amount: inner.amount,
            duration,
        })
    }
}
