//! URL Timer
//!
//! Measures the wall-clock latency of HTTP(S) GET requests against one or
//! more URLs, repeated over sequential rounds under a per-round deadline,
//! and reports per-request timings plus min/avg/max statistics.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, ProbeResult, RoundOutcome, TransportConfig};
pub use client::{HttpProber, Prober};
pub use executor::{RoundCollector, RoundRunner};
pub use stats::{StatsReporter, StatsSnapshot};
pub use output::ReportWriter;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_ROUND_TIMEOUT: Duration = Duration::from_millis(1000);
    pub const DEFAULT_ROUND_COUNT: u32 = 1;
    pub const DEFAULT_WAIT: Duration = Duration::from_millis(500);
    pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(5);
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
