//! Aggregate — per-vote running totals and decay normalization.
//!
//! Two incompatible backend schemas exist across revisions: plain nominal
//! totals, and decayed totals that must be divided by the decay factor in
//! force at the sampling instant. The wire layer resolves the schema once;
//! everything downstream works with the single [`Aggregate`] type.

pub mod convert;
pub mod wire;

pub use convert::AggregateValidationError;

use crate::shared::Side;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A vote's running totals, in one of the two observed server schemas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Aggregate {
    /// Nominal totals in e8s units.
    Plain { total_yes: u64, total_no: u64 },
    /// Decay-weighted totals, relative to the service's decay reference.
    Decayed {
        current_yes: Decimal,
        current_no: Decimal,
    },
}

impl Aggregate {
    /// The side's total in nominal units.
    ///
    /// Plain totals pass through untouched; decayed totals are normalized
    /// with `decay_factor`, which must have been sampled at the same instant
    /// as the aggregate snapshot (see [`normalize`]).
    pub fn nominal(&self, side: Side, decay_factor: Decimal) -> Result<Decimal, DecayError> {
        match self {
            Aggregate::Plain { total_yes, total_no } => {
                let total = match side {
                    Side::Yes => *total_yes,
                    Side::No => *total_no,
                };
                Ok(Decimal::from(total))
            }
            Aggregate::Decayed {
                current_yes,
                current_no,
            } => {
                let decayed = match side {
                    Side::Yes => *current_yes,
                    Side::No => *current_no,
                };
                normalize(decayed, decay_factor)
            }
        }
    }

    /// Combined nominal total of both sides.
    pub fn total(&self, decay_factor: Decimal) -> Result<Decimal, DecayError> {
        Ok(self.nominal(Side::Yes, decay_factor)? + self.nominal(Side::No, decay_factor)?)
    }
}

/// Convert a decayed value back to nominal units.
///
/// `decay_factor` must be the service's decay value sampled at the same
/// instant `decayed_value` was produced; a factor from another instant
/// silently skews magnitudes, and the type system cannot catch that — only
/// the caller can.
pub fn normalize(decayed_value: Decimal, decay_factor: Decimal) -> Result<Decimal, DecayError> {
    if decay_factor <= Decimal::ZERO {
        return Err(DecayError::InvalidDecay(decay_factor));
    }
    Ok(decayed_value / decay_factor)
}

/// Errors from decay normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecayError {
    /// The decay factor was zero or negative.
    InvalidDecay(Decimal),
}

impl fmt::Display for DecayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayError::InvalidDecay(factor) => {
                write!(f, "Decay factor must be positive, got {}", factor)
            }
        }
    }
}

impl std::error::Error for DecayError {}
