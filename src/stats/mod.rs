//! Running statistics over completed rounds

use crate::{models::RoundOutcome, types::RoundStatus};
use std::fmt;
use std::time::Duration;

/// Per-run round counters, incremented once per round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningCounters {
    /// Rounds where every probe reported before the deadline
    pub ok: u64,
    /// Rounds cut short by the deadline
    pub timeout: u64,
}

impl RunningCounters {
    pub fn attempts(&self) -> u64 {
        self.ok + self.timeout
    }
}

/// Accumulates one sample per complete round and the round counters
#[derive(Debug, Clone, Default)]
pub struct StatsReporter {
    counters: RunningCounters,
    samples: Vec<Duration>,
}

impl StatsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a round and fold it into the running state.
    ///
    /// Complete rounds contribute their mean probe duration as a sample;
    /// timed-out rounds only bump the timeout counter.
    pub fn record_round(&mut self, outcome: &RoundOutcome) -> RoundStatus {
        let status = outcome.status();
        match status {
            RoundStatus::Complete => {
                self.counters.ok += 1;
                if let Some(mean) = outcome.mean_duration() {
                    self.samples.push(mean);
                }
            }
            RoundStatus::TimedOut => self.counters.timeout += 1,
        }
        status
    }

    pub fn counters(&self) -> RunningCounters {
        self.counters
    }

    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Statistics over every round recorded so far
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            ok: self.counters.ok,
            attempts: self.counters.attempts(),
            timeouts: self.counters.timeout,
            min: min_of(&self.samples),
            avg: avg_of(&self.samples),
            max: max_of(&self.samples),
        }
    }
}

/// One report line worth of statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub ok: u64,
    pub attempts: u64,
    pub timeouts: u64,
    pub min: Duration,
    pub avg: Duration,
    pub max: Duration,
}

impl StatsSnapshot {
    /// Share of attempted rounds that timed out, 0 when nothing was attempted
    pub fn timeout_percentage(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.timeouts as f64 * 100.0 / self.attempts as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ok, {} timeout ({:.2}%) {:?}/{:?}/{:?}",
            self.ok,
            self.attempts,
            self.timeouts,
            self.timeout_percentage(),
            self.min,
            self.avg,
            self.max
        )
    }
}

/// Drop everything below whole milliseconds
pub fn truncate_to_millis(duration: Duration) -> Duration {
    Duration::from_millis(duration.as_millis() as u64)
}

pub fn min_of(samples: &[Duration]) -> Duration {
    samples.iter().min().copied().map_or(Duration::ZERO, truncate_to_millis)
}

pub fn max_of(samples: &[Duration]) -> Duration {
    samples.iter().max().copied().map_or(Duration::ZERO, truncate_to_millis)
}

/// Arithmetic mean computed in floating point, then truncated
pub fn avg_of(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total_nanos: f64 = samples.iter().map(|s| s.as_nanos() as f64).sum();
    let mean = Duration::from_nanos((total_nanos / samples.len() as f64) as u64);
    truncate_to_millis(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProbeResult;
    use proptest::prelude::*;

    fn round(ms: &[u64], url_count: usize) -> RoundOutcome {
        let results = ms
            .iter()
            .map(|m| ProbeResult::success("http://example.com/", Duration::from_millis(*m), 200))
            .collect();
        RoundOutcome::new(results, url_count)
    }

    #[test]
    fn test_empty_samples_are_zero() {
        assert_eq!(min_of(&[]), Duration::ZERO);
        assert_eq!(avg_of(&[]), Duration::ZERO);
        assert_eq!(max_of(&[]), Duration::ZERO);
    }

    #[test]
    fn test_truncation_drops_sub_millisecond_remainder() {
        let samples = [Duration::from_micros(1999)];
        assert_eq!(min_of(&samples), Duration::from_millis(1));
        assert_eq!(avg_of(&samples), Duration::from_millis(1));
        assert_eq!(max_of(&samples), Duration::from_millis(1));
    }

    #[test]
    fn test_average_truncates_after_mean() {
        // Mean is 1.4ms; truncating the samples first would yield 0.5ms -> 0ms
        let samples = [Duration::from_micros(900), Duration::from_micros(1900)];
        assert_eq!(avg_of(&samples), Duration::from_millis(1));
        assert_eq!(min_of(&samples), Duration::ZERO);
        assert_eq!(max_of(&samples), Duration::from_millis(1));
    }

    #[test]
    fn test_record_complete_and_timed_out_rounds() {
        let mut stats = StatsReporter::new();

        assert_eq!(stats.record_round(&round(&[10, 30], 2)), RoundStatus::Complete);
        assert_eq!(stats.record_round(&round(&[10], 2)), RoundStatus::TimedOut);
        assert_eq!(stats.record_round(&round(&[40, 40], 2)), RoundStatus::Complete);

        assert_eq!(stats.counters(), RunningCounters { ok: 2, timeout: 1 });
        assert_eq!(stats.samples(), &[Duration::from_millis(20), Duration::from_millis(40)]);
    }

    #[test]
    fn test_snapshot_line_format() {
        let mut stats = StatsReporter::new();
        stats.record_round(&round(&[12], 1));
        stats.record_round(&round(&[], 1));
        stats.record_round(&round(&[18], 1));
        stats.record_round(&round(&[1500], 1));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.attempts, 4);
        assert_eq!(snapshot.timeout_percentage(), 25.0);
        assert_eq!(snapshot.to_string(), "3/4 ok, 1 timeout (25.00%) 12ms/510ms/1.5s");
    }

    #[test]
    fn test_snapshot_without_rounds() {
        let snapshot = StatsReporter::new().snapshot();
        assert_eq!(snapshot.timeout_percentage(), 0.0);
        assert_eq!(snapshot.to_string(), "0/0 ok, 0 timeout (0.00%) 0ns/0ns/0ns");
    }

    #[test]
    fn test_all_rounds_timed_out() {
        let mut stats = StatsReporter::new();
        stats.record_round(&round(&[], 3));
        stats.record_round(&round(&[5, 5], 3));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.to_string(), "0/2 ok, 2 timeout (100.00%) 0ns/0ns/0ns");
    }

    proptest! {
        #[test]
        fn prop_min_avg_max_ordered(micros in proptest::collection::vec(0u64..10_000_000, 1..64)) {
            let samples: Vec<Duration> = micros.iter().map(|m| Duration::from_micros(*m)).collect();
            let (min, avg, max) = (min_of(&samples), avg_of(&samples), max_of(&samples));
            prop_assert!(min <= avg);
            prop_assert!(avg <= max);
        }

        #[test]
        fn prop_truncation_never_rounds_up(nanos in 0u64..100_000_000_000) {
            let duration = Duration::from_nanos(nanos);
            let truncated = truncate_to_millis(duration);
            prop_assert!(truncated <= duration);
            prop_assert!(duration - truncated < Duration::from_millis(1));
        }
    }
}
