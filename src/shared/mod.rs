//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod fmt;

use serde::{Deserialize, Serialize};

// ─── Time units ──────────────────────────────────────────────────────────────

/// The service clock ticks in nanoseconds since the Unix epoch.
pub const NS_PER_MS: u64 = 1_000_000;
pub const NS_PER_SECOND: u64 = 1_000_000_000;
pub const NS_PER_MINUTE: u64 = 60 * NS_PER_SECOND;
pub const NS_PER_HOUR: u64 = 60 * NS_PER_MINUTE;
pub const NS_PER_DAY: u64 = 24 * NS_PER_HOUR;
pub const NS_PER_WEEK: u64 = 7 * NS_PER_DAY;

/// Base units per whole token (e8s fixed-point).
pub const E8S_PER_UNIT: u64 = 100_000_000;

/// Convert a service timestamp (ns) to a chart x-position (ms).
///
/// Integer division throughout: timestamps are never compared through
/// floating point.
pub fn ns_to_ms(ns: u64) -> i64 {
    (ns / NS_PER_MS) as i64
}

// ─── VoteId ──────────────────────────────────────────────────────────────────

/// Newtype for vote identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteId(u64);

impl VoteId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VoteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ─── BallotId ────────────────────────────────────────────────────────────────

/// Newtype for ballot identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BallotId(u64);

impl BallotId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BallotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BallotId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Ballot side: Yes or No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Yes => "Yes",
            Side::No => "No",
        }
    }

    /// The opposite side.
    pub fn other(&self) -> Side {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Granularity ─────────────────────────────────────────────────────────────

/// Chart display window size, controlling sampling density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "1d")]
    Day,
    #[default]
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "1y")]
    Year,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "1d",
            Self::Week => "1w",
            Self::Month => "1M",
            Self::Year => "1y",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ns_to_ms_floors() {
        assert_eq!(ns_to_ms(0), 0);
        assert_eq!(ns_to_ms(999_999), 0);
        assert_eq!(ns_to_ms(1_000_000), 1);
        assert_eq!(ns_to_ms(25_500_000), 25);
    }

    #[test]
    fn test_vote_id_serde() {
        let id = VoteId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: VoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Yes.other(), Side::No);
        assert_eq!(Side::No.other(), Side::Yes);
    }

    #[test]
    fn test_granularity_serde() {
        let g: Granularity = serde_json::from_str("\"1w\"").unwrap();
        assert_eq!(g, Granularity::Week);
        assert_eq!(g.as_str(), "1w");
        assert_eq!(Granularity::default(), Granularity::Week);
    }
}
