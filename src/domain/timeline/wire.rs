//! Wire types for timeline snapshots.

use serde::{Deserialize, Serialize};

/// A single timestamped state from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTimedValue<T> {
    pub timestamp: u64,
    pub data: T,
}

/// Raw timeline snapshot: current state plus prior states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTimeline<T> {
    pub current: WireTimedValue<T>,
    #[serde(default = "Vec::new")]
    pub history: Vec<WireTimedValue<T>>,
}
