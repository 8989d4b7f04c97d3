//! Chart-ready series construction: interval planning, cumulative
//! resampling, value-axis levels.
//!
//! Everything here is pure arithmetic over validated domain types; the
//! rendering layer consumes the output as-is.

pub mod interval;
pub mod levels;
pub mod resample;

use rust_decimal::Decimal;
use serde::Serialize;

/// One point of a chart series: x-position in epoch milliseconds, exact
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: i64,
    pub value: Decimal,
}
