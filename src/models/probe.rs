//! Probe results and per-round outcomes

use crate::error::AppError;
use crate::types::RoundStatus;
use std::time::Duration;

/// Outcome of a single timed GET
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// URL as supplied by the caller
    pub url: String,

    /// Time elapsed up to success or up to the failure
    pub duration: Duration,

    /// HTTP status of the first response, if one arrived
    pub status: Option<u16>,

    /// Failure, if the probe did not complete
    pub error: Option<AppError>,
}

impl ProbeResult {
    pub fn success(url: impl Into<String>, duration: Duration, status: u16) -> Self {
        Self {
            url: url.into(),
            duration,
            status: Some(status),
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, duration: Duration, error: AppError) -> Self {
        Self {
            url: url.into(),
            duration,
            status: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything one round's collector gathered before its deadline
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    results: Vec<ProbeResult>,
    url_count: usize,
}

impl RoundOutcome {
    pub fn new(results: Vec<ProbeResult>, url_count: usize) -> Self {
        debug_assert!(results.len() <= url_count);
        Self { results, url_count }
    }

    /// Results in arrival order
    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn url_count(&self) -> usize {
        self.url_count
    }

    pub fn is_complete(&self) -> bool {
        self.results.len() == self.url_count
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_complete() {
            RoundStatus::Complete
        } else {
            RoundStatus::TimedOut
        }
    }

    /// Mean probe duration over the arrived results, `None` when nothing arrived
    pub fn mean_duration(&self) -> Option<Duration> {
        if self.results.is_empty() {
            return None;
        }
        let total: Duration = self.results.iter().map(|r| r.duration).sum();
        Some(total / self.results.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(url: &str, ms: u64) -> ProbeResult {
        ProbeResult::success(url, Duration::from_millis(ms), 200)
    }

    #[test]
    fn test_complete_round() {
        let outcome = RoundOutcome::new(vec![ok("a", 10), ok("b", 30)], 2);
        assert!(outcome.is_complete());
        assert_eq!(outcome.status(), RoundStatus::Complete);
        assert_eq!(outcome.mean_duration(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn test_partial_round_is_timed_out() {
        let outcome = RoundOutcome::new(vec![ok("a", 10)], 3);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.status(), RoundStatus::TimedOut);
    }

    #[test]
    fn test_empty_round_has_no_mean() {
        let outcome = RoundOutcome::new(Vec::new(), 2);
        assert_eq!(outcome.mean_duration(), None);
        assert_eq!(outcome.status(), RoundStatus::TimedOut);
    }

    #[test]
    fn test_failed_result_counts_as_arrived() {
        let failed = ProbeResult::failed(
            "http://127.0.0.1:1/",
            Duration::from_millis(2),
            AppError::network("connection refused"),
        );
        assert!(!failed.is_success());
        let outcome = RoundOutcome::new(vec![failed, ok("b", 4)], 2);
        assert!(outcome.is_complete());
        assert_eq!(outcome.mean_duration(), Some(Duration::from_millis(3)));
    }
}
