//! Unified SDK error types.

use thiserror::Error;

use crate::domain::aggregate::{AggregateValidationError, DecayError};
use crate::domain::ballot::BallotValidationError;
use crate::domain::consensus::ConsensusError;
use crate::domain::timeline::TimelineError;
use crate::domain::vote::VoteValidationError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),

    #[error("Ballot error: {0}")]
    Ballot(#[from] BallotValidationError),

    #[error("Vote error: {0}")]
    Vote(#[from] VoteValidationError),

    #[error("Aggregate error: {0}")]
    Aggregate(#[from] AggregateValidationError),

    #[error("Decay error: {0}")]
    Decay(#[from] DecayError),

    #[error("Consensus error: {0}")]
    Consensus(#[from] ConsensusError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
