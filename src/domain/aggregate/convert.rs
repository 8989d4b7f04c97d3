//! Conversion: WireAggregate → Aggregate (TryFrom + validation).

use super::wire::WireAggregate;
use super::Aggregate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Errors when validating an aggregate snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateValidationError {
    NonFiniteDecayed { field: &'static str, value: f64 },
    NegativeDecayed { field: &'static str, value: f64 },
}

impl fmt::Display for AggregateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateValidationError::NonFiniteDecayed { field, value } => {
                write!(f, "Decayed value {} is not finite: {}", field, value)
            }
            AggregateValidationError::NegativeDecayed { field, value } => {
                write!(f, "Decayed value {} is negative: {}", field, value)
            }
        }
    }
}

impl std::error::Error for AggregateValidationError {}

fn decayed_decimal(field: &'static str, value: f64) -> Result<Decimal, AggregateValidationError> {
    if value < 0.0 {
        return Err(AggregateValidationError::NegativeDecayed { field, value });
    }
    Decimal::from_f64(value).ok_or(AggregateValidationError::NonFiniteDecayed { field, value })
}

impl TryFrom<WireAggregate> for Aggregate {
    type Error = AggregateValidationError;

    fn try_from(source: WireAggregate) -> Result<Self, Self::Error> {
        match source {
            WireAggregate::Plain(plain) => Ok(Aggregate::Plain {
                total_yes: plain.total_yes,
                total_no: plain.total_no,
            }),
            WireAggregate::Decayed(decayed) => Ok(Aggregate::Decayed {
                current_yes: decayed_decimal("current_yes", decayed.current_yes.decayed)?,
                current_no: decayed_decimal("current_no", decayed.current_no.decayed)?,
            }),
        }
    }
}
