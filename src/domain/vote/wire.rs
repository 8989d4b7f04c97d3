//! Wire types for vote snapshots.

use crate::domain::aggregate::wire::WireAggregate;
use crate::domain::timeline::wire::WireTimeline;
use serde::{Deserialize, Serialize};

/// A vote as returned by the vote query endpoints, aggregate schema
/// unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireVote {
    pub vote_id: u64,
    pub text: String,
    pub date: u64,
    pub aggregate: WireTimeline<WireAggregate>,
}
