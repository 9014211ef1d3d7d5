//! Counter values derived from the simulation clock.
//!
//! Counts are never accumulated; every tick recomputes them from
//! `elapsed_seconds` so they cannot drift from the clock.

use bevy::prelude::*;

use crate::catalog::RateCatalog;
use crate::sim_clock::SimulationClock;

/// Absorbs float error in `elapsed * rate` (100 * 0.57 is 56.99999999999999).
const COUNT_EPSILON: f64 = 1e-9;

/// `floor(elapsed_seconds * rate_per_second)`.
///
/// Non-decreasing in `elapsed_seconds` for any `rate_per_second >= 0`.
/// Negative or non-finite rates count as zero.
pub fn compute_count(elapsed_seconds: u64, rate_per_second: f64) -> u64 {
    if !rate_per_second.is_finite() || rate_per_second <= 0.0 {
        return 0;
    }
    (elapsed_seconds as f64 * rate_per_second + COUNT_EPSILON).floor() as u64
}

/// Fired once per tick in which the aggregate count rose.
///
/// The particle field sacrifices exactly one particle per event regardless
/// of how far the count jumped.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateIncreased {
    pub previous: u64,
    pub current: u64,
}

/// Fired for each stream whose count rose this tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamCountIncreased {
    pub stream_index: usize,
    pub count: u64,
}

/// Current displayed value of every counter.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamCounters {
    counts: Vec<u64>,
    aggregate: u64,
}

impl StreamCounters {
    pub fn for_catalog(catalog: &RateCatalog) -> Self {
        Self {
            counts: vec![0; catalog.len()],
            aggregate: 0,
        }
    }

    pub fn count(&self, stream_index: usize) -> u64 {
        self.counts.get(stream_index).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn aggregate(&self) -> u64 {
        self.aggregate
    }

    /// Recompute every counter for `elapsed_seconds`, calling the callbacks
    /// for each value that increased.
    pub fn recompute(
        &mut self,
        elapsed_seconds: u64,
        catalog: &RateCatalog,
        mut on_stream: impl FnMut(StreamCountIncreased),
        mut on_aggregate: impl FnMut(AggregateIncreased),
    ) {
        self.counts.resize(catalog.len(), 0);
        for (i, stream) in catalog.streams().iter().enumerate() {
            let count = compute_count(elapsed_seconds, stream.rate_per_second);
            if count > self.counts[i] {
                on_stream(StreamCountIncreased {
                    stream_index: i,
                    count,
                });
            }
            self.counts[i] = count;
        }

        let aggregate = compute_count(elapsed_seconds, catalog.aggregate_rate_per_second());
        if aggregate > self.aggregate {
            on_aggregate(AggregateIncreased {
                previous: self.aggregate,
                current: aggregate,
            });
        }
        self.aggregate = aggregate;
    }

    /// Zero every counter without emitting events.
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
        self.aggregate = 0;
    }
}

/// Runs right after the clock tick on the 1 Hz schedule.
pub fn update_counters(
    clock: Res<SimulationClock>,
    catalog: Res<RateCatalog>,
    mut counters: ResMut<StreamCounters>,
    mut stream_events: EventWriter<StreamCountIncreased>,
    mut aggregate_events: EventWriter<AggregateIncreased>,
) {
    counters.recompute(
        clock.elapsed_seconds(),
        &catalog,
        |e| {
            stream_events.send(e);
        },
        |e| {
            aggregate_events.send(e);
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        assert_eq!(compute_count(100, 0.57), 57);
    }

    #[test]
    fn test_zero_time_and_zero_rate() {
        for rate in [0.0, 0.0003, 0.57, 1.55, 12.0] {
            assert_eq!(compute_count(0, rate), 0);
        }
        for t in [0, 1, 59, 86_400, 10_000_000] {
            assert_eq!(compute_count(t, 0.0), 0);
        }
    }

    #[test]
    fn test_monotonic_in_elapsed_seconds() {
        for rate in [0.0003, 0.007, 0.023, 0.57, 1.555_324] {
            let mut last = 0;
            for t in 0..5_000 {
                let c = compute_count(t, rate);
                assert!(c >= last, "count fell at t={t} rate={rate}: {last} -> {c}");
                last = c;
            }
        }
    }

    #[test]
    fn test_negative_rate_counts_as_zero() {
        assert_eq!(compute_count(100, -1.0), 0);
        assert_eq!(compute_count(100, f64::NAN), 0);
    }

    #[test]
    fn test_full_day_matches_daily_rate() {
        let rate = 49_000.0 / 86_400.0;
        assert_eq!(compute_count(86_400, rate), 49_000);
    }

    #[test]
    fn test_recompute_reports_increases() {
        let catalog = RateCatalog::builtin().unwrap();
        let mut counters = StreamCounters::for_catalog(&catalog);
        let mut streams = Vec::new();
        let mut aggregates = Vec::new();

        counters.recompute(1, &catalog, |e| streams.push(e), |e| aggregates.push(e));
        // 1.55/s aggregate rises to 1 after the first second; no single stream does.
        assert!(streams.is_empty());
        assert_eq!(
            aggregates,
            vec![AggregateIncreased {
                previous: 0,
                current: 1
            }]
        );

        counters.recompute(2, &catalog, |e| streams.push(e), |e| aggregates.push(e));
        // Cardiovascular (0.567/s) reaches 1 at t=2.
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].stream_index, 0);
        assert_eq!(counters.count(0), 1);
        assert_eq!(counters.aggregate(), 3);
    }

    #[test]
    fn test_recompute_same_time_is_silent() {
        let catalog = RateCatalog::builtin().unwrap();
        let mut counters = StreamCounters::for_catalog(&catalog);
        counters.recompute(10, &catalog, |_| {}, |_| {});
        let mut stream_fired = 0;
        let mut aggregate_fired = 0;
        counters.recompute(
            10,
            &catalog,
            |_| stream_fired += 1,
            |_| aggregate_fired += 1,
        );
        assert_eq!(stream_fired, 0);
        assert_eq!(aggregate_fired, 0);
    }

    #[test]
    fn test_reset_zeroes_all() {
        let catalog = RateCatalog::builtin().unwrap();
        let mut counters = StreamCounters::for_catalog(&catalog);
        counters.recompute(500, &catalog, |_| {}, |_| {});
        assert!(counters.aggregate() > 0);
        counters.reset();
        assert_eq!(counters.aggregate(), 0);
        assert!(counters.counts().iter().all(|&c| c == 0));
        assert_eq!(counters.counts().len(), catalog.len());
    }
}
