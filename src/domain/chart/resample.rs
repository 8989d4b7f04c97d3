//! Cumulative resampling of ballot logs and aggregate timelines.

use super::interval::Interval;
use super::ChartPoint;
use crate::domain::aggregate::{Aggregate, DecayError};
use crate::domain::ballot::{Ballot, BallotLog, PendingBallot};
use crate::domain::timeline::Timeline;
use crate::shared::{ns_to_ms, Side};
use rust_decimal::Decimal;

/// How ballot contributions are weighted while accumulating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecayWeighting {
    /// Raw amounts, no decay weighting.
    #[default]
    Nominal,
    /// Scale each contribution by the decay factor at its commit instant,
    /// once, at accumulation time. Scaling at read time instead would
    /// re-weight the whole running total at every sample.
    AtAccumulation,
}

/// Resample a set of events into a running-total step series, one point per
/// sample point of `interval`.
///
/// Events are stable-sorted by commit timestamp (simultaneous events keep
/// their given order) and consumed by a forward-only cursor; no event is
/// visited more than once across the whole walk. An empty event set yields a
/// flat zero series.
pub fn resample<'a, I, F>(
    events: I,
    interval: &Interval,
    weighting: DecayWeighting,
    decay_at: F,
) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = &'a Ballot>,
    F: Fn(u64) -> Decimal,
{
    let mut sorted: Vec<&Ballot> = events.into_iter().collect();
    sorted.sort_by_key(|ballot| ballot.timestamp);

    let mut points = Vec::with_capacity(interval.sample_points.len());
    let mut accumulated = Decimal::ZERO;
    let mut cursor = 0;

    for sample in &interval.sample_points {
        while cursor < sorted.len() && ns_to_ms(sorted[cursor].timestamp) <= sample.at_ms {
            let ballot = sorted[cursor];
            let amount = Decimal::from(ballot.amount);
            accumulated += match weighting {
                DecayWeighting::Nominal => amount,
                DecayWeighting::AtAccumulation => amount * decay_at(ballot.timestamp),
            };
            cursor += 1;
        }
        points.push(ChartPoint {
            time: sample.at_ms,
            value: accumulated,
        });
    }

    points
}

/// Both sides' running totals over one interval.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideSeries {
    pub yes: Vec<ChartPoint>,
    pub no: Vec<ChartPoint>,
    /// Largest combined total across the window, for value-axis levels.
    pub max_total: Decimal,
}

/// Partition a ballot log by side once, then resample each side.
pub fn resample_by_side<F>(
    log: &BallotLog,
    interval: &Interval,
    weighting: DecayWeighting,
    decay_at: F,
) -> SideSeries
where
    F: Fn(u64) -> Decimal,
{
    let yes = resample(log.side_events(Side::Yes), interval, weighting, &decay_at);
    let no = resample(log.side_events(Side::No), interval, weighting, &decay_at);

    let max_total = yes
        .iter()
        .zip(no.iter())
        .map(|(y, n)| y.value + n.value)
        .max()
        .unwrap_or(Decimal::ZERO);

    tracing::trace!(samples = yes.len(), %max_total, "resampled ballot log");

    SideSeries { yes, no, max_total }
}

/// Step-sample an aggregate timeline at the interval's sample points.
///
/// Each consumed snapshot is normalized with `current_decay` (see
/// [`crate::domain::aggregate::normalize`] for the same-instant caveat);
/// between snapshots the series holds its last value.
pub fn sample_aggregate(
    aggregate: &Timeline<Aggregate>,
    interval: &Interval,
    current_decay: Decimal,
) -> Result<SideSeries, DecayError> {
    let snapshots: Vec<_> = aggregate.iter().collect();

    let mut yes = Vec::with_capacity(interval.sample_points.len());
    let mut no = Vec::with_capacity(interval.sample_points.len());
    let mut yes_now = Decimal::ZERO;
    let mut no_now = Decimal::ZERO;
    let mut max_total = Decimal::ZERO;
    let mut cursor = 0;

    for sample in &interval.sample_points {
        while cursor < snapshots.len() && sample.at_ms >= ns_to_ms(snapshots[cursor].timestamp) {
            let snapshot = &snapshots[cursor].data;
            yes_now = snapshot.nominal(Side::Yes, current_decay)?;
            no_now = snapshot.nominal(Side::No, current_decay)?;
            let total = yes_now + no_now;
            if total > max_total {
                max_total = total;
            }
            cursor += 1;
        }
        yes.push(ChartPoint {
            time: sample.at_ms,
            value: yes_now,
        });
        no.push(ChartPoint {
            time: sample.at_ms,
            value: no_now,
        });
    }

    Ok(SideSeries { yes, no, max_total })
}

/// Overlay the user's uncommitted ballot on the final point of its side.
pub fn apply_pending(series: &mut SideSeries, pending: &PendingBallot) {
    if pending.amount == 0 {
        return;
    }
    let amount = Decimal::from(pending.amount);
    let lane = match pending.side {
        Side::Yes => &mut series.yes,
        Side::No => &mut series.no,
    };
    if let Some(last) = lane.last_mut() {
        last.value += amount;
        series.max_total += amount;
    }
}

/// Project a timeline into a chart-ready step series, with a final point at
/// `now_ns` carrying the current value.
pub fn timeline_points<T>(timeline: &Timeline<T>, now_ns: u64) -> Vec<ChartPoint>
where
    T: Copy + Into<Decimal>,
{
    let mut points: Vec<ChartPoint> = timeline
        .iter()
        .map(|entry| ChartPoint {
            time: ns_to_ms(entry.timestamp),
            value: entry.data.into(),
        })
        .collect();
    points.push(ChartPoint {
        time: ns_to_ms(now_ns),
        value: timeline.current().data.into(),
    });
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::interval::SamplePoint;
    use crate::domain::timeline::TimedValue;
    use crate::shared::{BallotId, VoteId, NS_PER_MS};

    fn ballot(timestamp_ms: u64, side: Side, amount: u64) -> Ballot {
        let timestamp = timestamp_ms * NS_PER_MS;
        Ballot {
            id: BallotId::new(timestamp_ms),
            vote_id: VoteId::new(1),
            timestamp,
            side,
            amount,
            duration: Timeline::of(TimedValue {
                timestamp,
                data: 1_000,
            }),
        }
    }

    fn interval_at(points_ms: &[i64]) -> Interval {
        Interval {
            start_ns: 0,
            end_ns: 0,
            sample_points: points_ms.iter().map(|&ms| SamplePoint::at(ms)).collect(),
            tick_positions: Vec::new(),
        }
    }

    fn values(points: &[ChartPoint]) -> Vec<Decimal> {
        points.iter().map(|point| point.value).collect()
    }

    #[test]
    fn test_running_totals_per_side() {
        let log: BallotLog = [
            ballot(0, Side::Yes, 100),
            ballot(10, Side::No, 50),
            ballot(25, Side::Yes, 30),
        ]
        .into_iter()
        .collect();
        let interval = interval_at(&[0, 10, 20, 30]);

        let series = resample_by_side(&log, &interval, DecayWeighting::Nominal, |_| Decimal::ONE);

        let expected_yes: Vec<Decimal> = [100, 100, 100, 130].map(Decimal::from).to_vec();
        let expected_no: Vec<Decimal> = [0, 50, 50, 50].map(Decimal::from).to_vec();
        assert_eq!(values(&series.yes), expected_yes);
        assert_eq!(values(&series.no), expected_no);
        assert_eq!(series.max_total, Decimal::from(180));
    }

    #[test]
    fn test_empty_log_is_flat_zero() {
        let interval = interval_at(&[0, 10, 20]);
        let series = resample_by_side(
            &BallotLog::new(),
            &interval,
            DecayWeighting::Nominal,
            |_| Decimal::ONE,
        );
        assert_eq!(series.yes.len(), interval.sample_points.len());
        assert!(series.yes.iter().all(|point| point.value.is_zero()));
        assert!(series.no.iter().all(|point| point.value.is_zero()));
        assert_eq!(series.max_total, Decimal::ZERO);
    }

    #[test]
    fn test_nominal_series_is_monotonic() {
        let log: BallotLog = (0..20)
            .map(|i| ballot(i * 7, Side::Yes, (i % 5) * 10))
            .collect();
        let interval = interval_at(&[0, 25, 50, 75, 100, 125, 150]);

        let points = resample(
            log.side_events(Side::Yes),
            &interval,
            DecayWeighting::Nominal,
            |_| Decimal::ONE,
        );
        assert_eq!(points.len(), interval.sample_points.len());
        assert!(points.windows(2).all(|pair| pair[0].value <= pair[1].value));
        assert!(points.windows(2).all(|pair| pair[0].time < pair[1].time));
    }

    #[test]
    fn test_events_before_window_count_into_first_sample() {
        let log: BallotLog = [ballot(0, Side::Yes, 40)].into_iter().collect();
        let interval = interval_at(&[10, 20]);
        let points = resample(
            log.side_events(Side::Yes),
            &interval,
            DecayWeighting::Nominal,
            |_| Decimal::ONE,
        );
        assert_eq!(values(&points), [Decimal::from(40), Decimal::from(40)]);
    }

    #[test]
    fn test_accumulation_time_weighting() {
        let log: BallotLog = [
            ballot(0, Side::Yes, 100),
            ballot(20, Side::Yes, 100),
        ]
        .into_iter()
        .collect();
        let interval = interval_at(&[0, 10, 20]);

        // Older commits weigh half as much.
        let points = resample(
            log.side_events(Side::Yes),
            &interval,
            DecayWeighting::AtAccumulation,
            |timestamp| {
                if timestamp == 0 {
                    Decimal::new(5, 1)
                } else {
                    Decimal::ONE
                }
            },
        );
        let expected: Vec<Decimal> = [Decimal::from(50), Decimal::from(50), Decimal::from(150)].to_vec();
        assert_eq!(values(&points), expected);
    }

    #[test]
    fn test_sample_aggregate_normalizes_decayed_snapshots() {
        let aggregate = Timeline::new(
            TimedValue {
                timestamp: 20 * NS_PER_MS,
                data: Aggregate::Decayed {
                    current_yes: Decimal::from(60),
                    current_no: Decimal::from(20),
                },
            },
            vec![TimedValue {
                timestamp: 10 * NS_PER_MS,
                data: Aggregate::Decayed {
                    current_yes: Decimal::from(30),
                    current_no: Decimal::from(10),
                },
            }],
        )
        .unwrap();
        let interval = interval_at(&[0, 10, 20, 30]);

        let factor = Decimal::new(5, 1); // 0.5
        let series = sample_aggregate(&aggregate, &interval, factor).unwrap();

        let expected_yes: Vec<Decimal> = [0, 60, 120, 120].map(Decimal::from).to_vec();
        let expected_no: Vec<Decimal> = [0, 20, 40, 40].map(Decimal::from).to_vec();
        assert_eq!(values(&series.yes), expected_yes);
        assert_eq!(values(&series.no), expected_no);
        assert_eq!(series.max_total, Decimal::from(160));
    }

    #[test]
    fn test_sample_aggregate_zero_decay_fails() {
        let aggregate = Timeline::of(TimedValue {
            timestamp: 0,
            data: Aggregate::Decayed {
                current_yes: Decimal::from(60),
                current_no: Decimal::from(20),
            },
        });
        let interval = interval_at(&[0]);
        assert!(matches!(
            sample_aggregate(&aggregate, &interval, Decimal::ZERO),
            Err(DecayError::InvalidDecay(_))
        ));
    }

    #[test]
    fn test_apply_pending_bumps_only_final_point() {
        let log: BallotLog = [ballot(0, Side::Yes, 100), ballot(5, Side::No, 40)]
            .into_iter()
            .collect();
        let interval = interval_at(&[0, 10, 20]);
        let mut series =
            resample_by_side(&log, &interval, DecayWeighting::Nominal, |_| Decimal::ONE);

        apply_pending(
            &mut series,
            &PendingBallot {
                side: Side::No,
                amount: 25,
            },
        );

        let expected_no: Vec<Decimal> = [Decimal::from(40), Decimal::from(40), Decimal::from(65)].to_vec();
        assert_eq!(values(&series.no), expected_no);
        let expected_yes: Vec<Decimal> = [100, 100, 100].map(Decimal::from).to_vec();
        assert_eq!(values(&series.yes), expected_yes);
        assert_eq!(series.max_total, Decimal::from(165));
    }

    #[test]
    fn test_timeline_points_appends_now() {
        let timeline = Timeline::new(
            TimedValue {
                timestamp: 20 * NS_PER_MS,
                data: 7_u64,
            },
            vec![TimedValue {
                timestamp: 10 * NS_PER_MS,
                data: 3_u64,
            }],
        )
        .unwrap();

        let points = timeline_points(&timeline, 35 * NS_PER_MS);
        let times: Vec<i64> = points.iter().map(|point| point.time).collect();
        assert_eq!(times, [10, 20, 35]);
        assert_eq!(points[2].value, Decimal::from(7));
    }
}
