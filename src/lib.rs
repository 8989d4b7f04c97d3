//! # Tally SDK
//!
//! A Rust SDK for the Tally voting protocol: pure, chart-ready reconstruction
//! of voting and locking time series from the raw snapshots the protocol
//! service returns.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared** — Newtypes, time units, display formatting (always available)
//! 2. **Domain** — Vertical slices: wire types, validated conversions, domain models
//! 3. **Charts** — Interval planning, cumulative resampling, axis levels
//!
//! Everything is synchronous and pure: each function takes its inputs
//! explicitly (the latest fetched snapshot, the service clock, the decay
//! factor) and returns a new value. Transport, authentication, and rendering
//! live outside this crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tally_sdk::prelude::*;
//!
//! let interval = compute_interval(now_ns, Granularity::Week);
//! let series = resample_by_side(&log, &interval, DecayWeighting::Nominal, |_| Decimal::ONE);
//! let summary = summarize(total_yes, total_no, None)?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes, time units, and display formatting.
pub mod shared;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, charts.
pub mod domain;

/// Unified SDK error types.
pub mod error;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{BallotId, Granularity, Side, VoteId};

    // Shared formatting
    pub use crate::shared::fmt::balance::format_balance_e8s;
    pub use crate::shared::fmt::duration::format_duration;

    // Domain types — timeline
    pub use crate::domain::timeline::{TimedValue, Timeline, TimelineError};

    // Domain types — ballot
    pub use crate::domain::ballot::{Ballot, BallotLog, BallotValidationError, PendingBallot};

    // Domain types — aggregate + decay
    pub use crate::domain::aggregate::{normalize, Aggregate, AggregateValidationError, DecayError};

    // Domain types — vote
    pub use crate::domain::vote::{Vote, VoteValidationError};

    // Charts — interval planning, resampling, axis levels
    pub use crate::domain::chart::interval::{
        compute_interval, tick_label, ticks_between, Interval, SamplePoint,
    };
    pub use crate::domain::chart::levels::value_levels;
    pub use crate::domain::chart::resample::{
        apply_pending, resample, resample_by_side, sample_aggregate, timeline_points,
        DecayWeighting, SideSeries,
    };
    pub use crate::domain::chart::ChartPoint;

    // Locks
    pub use crate::domain::lock::{lock_span, project, LockProjection, LockSpan};

    // Consensus
    pub use crate::domain::consensus::{
        ballot_to_reach, clamp_cursor, cursor, summarize, ConsensusError, Summary,
    };

    // Errors
    pub use crate::error::SdkError;
}
