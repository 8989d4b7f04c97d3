//! Humanized duration formatting.

use crate::shared::{NS_PER_DAY, NS_PER_HOUR, NS_PER_MINUTE, NS_PER_SECOND, NS_PER_WEEK};

/// Average month, 30.44 days in nanoseconds.
const NS_PER_MONTH_AVG: u64 = 2_630_016 * NS_PER_SECOND;
const NS_PER_YEAR: u64 = 365 * NS_PER_DAY;

/// Format a duration in nanoseconds as a human-readable string, picking the
/// largest unit that keeps the value above one.
///
/// ```
/// use tally_sdk::shared::fmt::duration::format_duration;
///
/// assert_eq!(format_duration(90 * 1_000_000_000), "1.5 minutes");
/// ```
pub fn format_duration(ns: u64) -> String {
    if ns < NS_PER_MINUTE {
        let seconds = ns as f64 / NS_PER_SECOND as f64;
        format!("{:.1} seconds", seconds)
    } else if ns < NS_PER_HOUR {
        let minutes = ns as f64 / NS_PER_MINUTE as f64;
        format!("{:.1} minutes", minutes)
    } else if ns < NS_PER_DAY {
        let hours = ns as f64 / NS_PER_HOUR as f64;
        format!("{:.1} hours", hours)
    } else if ns < NS_PER_WEEK {
        let days = ns as f64 / NS_PER_DAY as f64;
        format!("{} days", days.round())
    } else if ns < NS_PER_MONTH_AVG {
        let weeks = ns as f64 / NS_PER_WEEK as f64;
        format!("{:.1} weeks", weeks)
    } else if ns < NS_PER_YEAR {
        let months = ns as f64 / NS_PER_MONTH_AVG as f64;
        format!("{:.1} months", months)
    } else {
        let years = ns as f64 / NS_PER_YEAR as f64;
        format!("{:.1} years", years)
    }
}
