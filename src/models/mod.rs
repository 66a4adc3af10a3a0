//! Data models and structures for the URL timer

pub mod config;
pub mod probe;

// Re-export main model types
pub use config::{Config, TransportConfig};
pub use probe::{ProbeResult, RoundOutcome};
