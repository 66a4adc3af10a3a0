//! Command-line interface

use crate::types::AbandonPolicy;
use clap::Parser;
use std::net::IpAddr;

/// Measure time to GET one or more URLs, repeated over timed rounds
#[derive(Parser, Debug, Clone)]
#[command(name = "urltimer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Per-round timeout in milliseconds
    #[arg(short = 't', value_name = "MS", default_value_t = crate::defaults::DEFAULT_ROUND_TIMEOUT.as_millis() as u64)]
    pub timeout: u64,

    /// Number of rounds
    #[arg(short = 'c', value_name = "COUNT", default_value_t = crate::defaults::DEFAULT_ROUND_COUNT)]
    pub count: u32,

    /// IP address to send requests to instead of the resolved one
    #[arg(short = 'i', value_name = "IP")]
    pub ip: Option<IpAddr>,

    /// TCP port to connect to instead of the URL's port
    #[arg(short = 'p', value_name = "PORT")]
    pub port: Option<u16>,

    /// Skip TLS certificate verification
    #[arg(short = 'k')]
    pub insecure: bool,

    /// Milliseconds to wait between rounds
    #[arg(short = 'w', value_name = "MS", default_value_t = crate::defaults::DEFAULT_WAIT.as_millis() as u64)]
    pub wait: u64,

    /// Do not print a line per request
    #[arg(long)]
    pub quiet: bool,

    /// Print running statistics at this interval, in seconds
    #[arg(long, value_name = "SECS", default_value_t = crate::defaults::DEFAULT_REPORT_INTERVAL.as_secs())]
    pub report_interval: u64,

    /// What to do with requests still running when a round times out
    #[arg(long, value_enum, default_value_t = AbandonPolicy::Cancel)]
    pub on_timeout: AbandonPolicy,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// URLs to time (http or https)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}

impl Cli {
    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        !self.no_color && supports_color()
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    cfg!(unix)
}
