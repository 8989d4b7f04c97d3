//! Lock-duration projection for bar rendering.
//!
//! Each ballot locks its amount for a duration the service may extend over
//! time. The bar for a ballot runs from its commit instant to the current
//! lock end; the split between "originally committed" and "since extended"
//! is carried as a percentage for the two-color fill.

use crate::domain::ballot::Ballot;
use crate::shared::ns_to_ms;
use serde::Serialize;

/// Chart coordinates of one ballot's lock bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LockProjection {
    /// Commit instant, epoch milliseconds.
    pub start_ms: i64,
    /// End of the originally committed duration.
    pub initial_end_ms: i64,
    /// End of the current (possibly extended) duration.
    pub current_end_ms: i64,
    /// Share of the bar covered by the original duration, in percent.
    pub percent_initial: f64,
}

/// Project a ballot's duration timeline onto the lock bar coordinates.
pub fn project(ballot: &Ballot) -> LockProjection {
    let start_ms = ns_to_ms(ballot.timestamp);
    let initial_end_ms = ns_to_ms(ballot.timestamp + ballot.duration.first().data);
    let current_end_ms = ns_to_ms(ballot.timestamp + ballot.duration.current().data);

    // Zero-length lock: the whole bar is "initial".
    let percent_initial = if current_end_ms == start_ms {
        100.0
    } else {
        (initial_end_ms - start_ms) as f64 / (current_end_ms - start_ms) as f64 * 100.0
    };

    LockProjection {
        start_ms,
        initial_end_ms,
        current_end_ms,
        percent_initial,
    }
}

/// The combined date range of a set of lock bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockSpan {
    pub min_start_ms: i64,
    pub max_end_ms: i64,
}

/// Date range spanned by the given ballots' lock bars, `None` when there
/// are no ballots. Feeds chart width and the tick rail
/// ([`crate::domain::chart::interval::ticks_between`]).
pub fn lock_span<'a, I>(ballots: I) -> Option<LockSpan>
where
    I: IntoIterator<Item = &'a Ballot>,
{
    let mut span: Option<LockSpan> = None;
    for ballot in ballots {
        let projection = project(ballot);
        let entry = span.get_or_insert(LockSpan {
            min_start_ms: projection.start_ms,
            max_end_ms: projection.current_end_ms,
        });
        entry.min_start_ms = entry.min_start_ms.min(projection.start_ms);
        entry.max_end_ms = entry.max_end_ms.max(projection.current_end_ms);
    }
    span
}
