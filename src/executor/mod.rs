//! Round execution engine
//!
//! - [`RoundCollector`] fans one probe task out per URL and fans the
//!   results back in under a per-round deadline
//! - [`RoundRunner`] drives the sequential rounds and the reporting cadence

pub mod collector;
pub mod runner;

pub use collector::RoundCollector;
pub use runner::RoundRunner;

use crate::models::Config;
use std::time::Duration;

/// Round-loop parameters taken from the run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Number of sequential rounds
    pub round_count: u32,
    /// Deadline for collecting one round
    pub round_timeout: Duration,
    /// Sleep between rounds, never after the last one
    pub wait: Duration,
    /// Cadence of the periodic statistics line
    pub report_interval: Duration,
    /// Suppress per-request lines
    pub quiet: bool,
}

impl From<&Config> for RunSettings {
    fn from(config: &Config) -> Self {
        Self {
            round_count: config.round_count,
            round_timeout: config.round_timeout(),
            wait: config.wait(),
            report_interval: config.report_interval(),
            quiet: config.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            target_urls: vec!["http://example.com/".to_string()],
            round_timeout_ms: 250,
            round_count: 7,
            wait_ms: 40,
            report_interval_secs: 3,
            quiet: true,
            ..Config::default()
        };

        let settings = RunSettings::from(&config);

        assert_eq!(settings.round_count, 7);
        assert_eq!(settings.round_timeout, Duration::from_millis(250));
        assert_eq!(settings.wait, Duration::from_millis(40));
        assert_eq!(settings.report_interval, Duration::from_secs(3));
        assert!(settings.quiet);
    }
}
