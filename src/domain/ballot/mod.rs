//! Ballot — a single timestamped commitment of an amount to one side.

pub mod convert;
pub mod wire;

pub use convert::BallotValidationError;

use crate::domain::timeline::Timeline;
use crate::error::SdkError;
use crate::shared::{BallotId, Side, VoteId};
use serde::{Deserialize, Serialize};

/// A committed ballot.
///
/// `timestamp` and `amount` are immutable after creation. `duration` is the
/// lock duration timeline: the service may extend it, observed here only as
/// a longer timeline on the next fetch — the client never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ballot {
    pub id: BallotId,
    pub vote_id: VoteId,
    /// Commit instant, ns since epoch.
    pub timestamp: u64,
    pub side: Side,
    /// Committed amount in e8s.
    pub amount: u64,
    /// Lock duration in ns, possibly extended over time.
    pub duration: Timeline<u64>,
}

/// A ballot the user is still composing, not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingBallot {
    pub side: Side,
    pub amount: u64,
}

/// An unordered collection of a subject's ballots.
///
/// Ordering is imposed lazily: [`BallotLog::side_events`] partitions and
/// sorts once per side, so resampling never re-scans or re-sorts per sample
/// point. Simultaneous ballots keep their insertion order (stable sort; the
/// service defines no secondary key).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BallotLog {
    ballots: Vec<Ballot>,
}

impl BallotLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a raw ballot-query snapshot (a JSON array of
    /// queried ballots).
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let wires: Vec<wire::WireQueriedBallot> = serde_json::from_str(json)?;
        wires
            .into_iter()
            .map(Ballot::try_from)
            .collect::<Result<Self, _>>()
            .map_err(Into::into)
    }

    pub fn push(&mut self, ballot: Ballot) {
        self.ballots.push(ballot);
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    /// The side's ballots, sorted ascending by commit timestamp.
    pub fn side_events(&self, side: Side) -> Vec<&Ballot> {
        let mut events: Vec<&Ballot> = self.ballots.iter().filter(|b| b.side == side).collect();
        events.sort_by_key(|b| b.timestamp);
        events
    }

    pub fn len(&self) -> usize {
        self.ballots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }
}

impl FromIterator<Ballot> for BallotLog {
    fn from_iter<I: IntoIterator<Item = Ballot>>(iter: I) -> Self {
        Self {
            ballots: iter.into_iter().collect(),
        }
    }
}
