//! Vote — the subject entity ballots are committed against.

pub mod convert;
pub mod wire;

pub use convert::VoteValidationError;

use crate::domain::aggregate::{Aggregate, DecayError};
use crate::domain::timeline::Timeline;
use crate::error::SdkError;
use crate::shared::{Side, VoteId};
use rust_decimal::Decimal;
use serde::Serialize;

/// A vote with the timeline of its aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vote {
    pub id: VoteId,
    pub text: String,
    /// Opening instant, ns since epoch.
    pub date: u64,
    /// Running totals over time; the current entry is the latest snapshot.
    pub aggregate: Timeline<Aggregate>,
}

impl Vote {
    /// Parse and validate a raw vote snapshot.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let wire: wire::WireVote = serde_json::from_str(json)?;
        Ok(Self::try_from(wire)?)
    }

    /// The latest aggregate snapshot.
    pub fn latest_aggregate(&self) -> &Aggregate {
        &self.aggregate.current().data
    }

    /// Latest nominal totals as `(yes, no)`.
    pub fn totals(&self, decay_factor: Decimal) -> Result<(Decimal, Decimal), DecayError> {
        let aggregate = self.latest_aggregate();
        Ok((
            aggregate.nominal(Side::Yes, decay_factor)?,
            aggregate.nominal(Side::No, decay_factor)?,
        ))
    }
}
