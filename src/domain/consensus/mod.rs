//! Consensus summary and cursor math.

use crate::domain::ballot::PendingBallot;
use crate::shared::Side;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// The provisional result of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub side: Side,
    /// Weighted share of the winning side, in `[0.5, 1]`.
    pub ratio: Decimal,
}

/// Errors from consensus computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsensusError {
    /// No amount has been committed or staged yet. Callers treat this as
    /// "no result yet", not as a failure to surface.
    UndefinedConsensus,
}

impl fmt::Display for ConsensusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsensusError::UndefinedConsensus => write!(f, "No ballots committed yet"),
        }
    }
}

impl std::error::Error for ConsensusError {}

/// Summarize the provisional result, folding in the user's uncommitted
/// ballot.
///
/// The ratio is the yes-share of all weight (committed plus pending); the
/// winning side is Yes at or above one half, and the reported ratio is
/// always the winner's share.
pub fn summarize(
    total_yes: u64,
    total_no: u64,
    pending: Option<PendingBallot>,
) -> Result<Summary, ConsensusError> {
    let pending_amount = pending.map_or(0, |p| p.amount);
    let combined = total_yes + total_no + pending_amount;
    if combined == 0 {
        return Err(ConsensusError::UndefinedConsensus);
    }

    let pending_yes = match pending {
        Some(p) if p.side == Side::Yes => p.amount,
        _ => 0,
    };
    let ratio = Decimal::from(total_yes + pending_yes) / Decimal::from(combined);

    if ratio >= Decimal::new(5, 1) {
        Ok(Summary {
            side: Side::Yes,
            ratio,
        })
    } else {
        Ok(Summary {
            side: Side::No,
            ratio: Decimal::ONE - ratio,
        })
    }
}

// Slider extremes sit just inside [0, 1] so the inverse cursor math never
// divides by zero.
pub const MIN_CURSOR: f64 = 0.001;
pub const MAX_CURSOR: f64 = 0.999;

pub fn clamp_cursor(cursor: f64) -> f64 {
    cursor.clamp(MIN_CURSOR, MAX_CURSOR)
}

/// Yes-share of the committed totals: the slider's resting position.
pub fn cursor(total_yes: u64, total_no: u64) -> Result<f64, ConsensusError> {
    let total = total_yes + total_no;
    if total == 0 {
        return Err(ConsensusError::UndefinedConsensus);
    }
    Ok(total_yes as f64 / total as f64)
}

/// The pending ballot that would move the cursor to `target`.
///
/// Inverse of [`cursor`] with the pending amount folded in; the amount is
/// floored to whole e8s units.
pub fn ballot_to_reach(
    total_yes: u64,
    total_no: u64,
    target: f64,
) -> Result<PendingBallot, ConsensusError> {
    let resting = clamp_cursor(cursor(total_yes, total_no)?);
    let target = clamp_cursor(target);
    let total = (total_yes + total_no) as f64;
    let yes = total_yes as f64;

    if target < resting {
        let amount = (yes / target - total).floor().max(0.0) as u64;
        Ok(PendingBallot {
            side: Side::No,
            amount,
        })
    } else {
        let amount = ((target * total - yes) / (1.0 - target)).floor().max(0.0) as u64;
        Ok(PendingBallot {
            side: Side::Yes,
            amount,
        })
    }
}
