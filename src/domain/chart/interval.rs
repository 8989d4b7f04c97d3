//! Interval planning — window, sampling step, and tick rail per granularity.
//!
//! All window arithmetic is exact integer nanoseconds; floating point never
//! touches anything compared against a timestamp.

use crate::shared::{ns_to_ms, Granularity, NS_PER_DAY, NS_PER_HOUR};
use chrono::{DateTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Fixed per-granularity chart parameters, all in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GranularityParams {
    /// Nominal window duration.
    pub window: u64,
    /// Sampling step.
    pub sample: u64,
    /// Axis tick spacing, independent of the sampling step.
    pub tick: u64,
}

impl GranularityParams {
    /// The window rounded up to a whole number of sample steps; the planned
    /// interval always spans exactly this much.
    pub fn effective_window(&self) -> u64 {
        self.sample * self.window.div_ceil(self.sample)
    }
}

/// Chart parameters for a granularity.
pub fn params(granularity: Granularity) -> GranularityParams {
    match granularity {
        Granularity::Day => GranularityParams {
            window: NS_PER_DAY,
            sample: NS_PER_HOUR,
            tick: 2 * NS_PER_HOUR,
        },
        Granularity::Week => GranularityParams {
            window: 7 * NS_PER_DAY,
            sample: 6 * NS_PER_HOUR,
            tick: 12 * NS_PER_HOUR,
        },
        Granularity::Month => GranularityParams {
            window: 30 * NS_PER_DAY,
            sample: NS_PER_DAY,
            tick: 2 * NS_PER_DAY,
        },
        Granularity::Year => GranularityParams {
            window: 365 * NS_PER_DAY,
            sample: 15 * NS_PER_DAY,
            tick: 30 * NS_PER_DAY,
        },
    }
}

/// A synthetic instant the resampler must report a value at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    /// Epoch milliseconds.
    pub at_ms: i64,
    /// Decay factor at this instant; 1 when the true factor was not fetched.
    pub decay: Decimal,
}

impl SamplePoint {
    pub fn at(at_ms: i64) -> Self {
        Self {
            at_ms,
            decay: Decimal::ONE,
        }
    }
}

/// A planned sampling window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    pub start_ns: u64,
    pub end_ns: u64,
    pub sample_points: Vec<SamplePoint>,
    /// Axis tick positions, epoch milliseconds.
    pub tick_positions: Vec<i64>,
}

/// Plan the sampling window ending at the first step boundary at or after
/// `now_ns`.
///
/// The step loop is half-open over `[start, end)` with one explicit final
/// point at `end`; folding `end` into the loop would emit the boundary
/// instant twice.
pub fn compute_interval(now_ns: u64, granularity: Granularity) -> Interval {
    let params = params(granularity);
    let num_samples = params.window.div_ceil(params.sample);

    let end_ns = (now_ns / params.sample) * params.sample + params.sample;
    let start_ns = end_ns.saturating_sub(params.sample * num_samples);

    let mut sample_points: Vec<SamplePoint> = (0..num_samples)
        .map(|index| SamplePoint::at(ns_to_ms(start_ns + index * params.sample)))
        .collect();
    sample_points.push(SamplePoint::at(ns_to_ms(end_ns)));

    let tick_positions = ticks_between(start_ns, end_ns, params.tick);

    tracing::debug!(
        granularity = %granularity,
        start_ns,
        end_ns,
        samples = sample_points.len(),
        "planned chart interval"
    );

    Interval {
        start_ns,
        end_ns,
        sample_points,
        tick_positions,
    }
}

/// Tick positions spaced `step_ns` apart spanning `[start_ns, end_ns]`,
/// as epoch milliseconds. Lock charts use this directly over their own
/// date range.
pub fn ticks_between(start_ns: u64, end_ns: u64, step_ns: u64) -> Vec<i64> {
    if step_ns == 0 {
        return Vec::new();
    }
    let mut ticks = Vec::new();
    let mut at = start_ns;
    while at <= end_ns {
        ticks.push(ns_to_ms(at));
        at += step_ns;
    }
    ticks
}

/// Axis label for a tick position.
pub fn tick_label(granularity: Granularity, at_ms: i64) -> String {
    let Some(date) = DateTime::<Utc>::from_timestamp_millis(at_ms) else {
        return String::new();
    };
    let pattern = match granularity {
        Granularity::Day => "%H:%M",
        // Midnight ticks show the day, intraday ticks the hour.
        Granularity::Week => {
            if date.hour() == 0 {
                "%d %b"
            } else {
                "%H:%M"
            }
        }
        Granularity::Month => "%d %b",
        Granularity::Year => "%b %y",
    };
    date.format(pattern).to_string()
}
