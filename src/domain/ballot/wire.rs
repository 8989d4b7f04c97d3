//! Wire types for queried ballots.
//!
//! The backend nests each ballot under its choice-type tag (`YES_NO` is the
//! only one in service) and encodes the chosen side as an externally-tagged
//! variant with a null payload.

use crate::domain::timeline::wire::WireTimeline;
use serde::{Deserialize, Serialize};

/// A ballot as returned by the ballot query endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireQueriedBallot {
    pub vote_id: u64,
    pub ballot_id: u64,
    pub ballot: WireBallotType,
}

/// Choice-type wrapper around the ballot payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WireBallotType {
    #[serde(rename = "YES_NO")]
    YesNo(WireYesNoBallot),
}

/// The yes/no ballot payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireYesNoBallot {
    pub timestamp: u64,
    pub choice: WireChoice,
    pub amount: u64,
    pub duration_ns: WireTimeline<u64>,
}

/// The chosen side, encoded as `{"YES": null}` / `{"NO": null}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WireChoice {
    #[serde(rename = "YES")]
    Yes(()),
    #[serde(rename = "NO")]
    No(()),
}
