//! Configuration data model and validation

use crate::types::{AbandonPolicy, AppError, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;
use url::{Host, Url};

/// Main application configuration, resolved once before the first round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target URLs probed every round, duplicates allowed
    pub target_urls: Vec<String>,

    /// Deadline for collecting one round's results
    #[serde(default = "default_round_timeout_ms")]
    pub round_timeout_ms: u64,

    /// Number of sequential rounds
    #[serde(default = "default_round_count")]
    pub round_count: u32,

    /// Sleep between consecutive rounds
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,

    /// Cadence of the periodic statistics line
    #[serde(default = "default_report_interval_secs")]
    pub report_interval_secs: u64,

    /// Suppress per-request lines
    #[serde(default)]
    pub quiet: bool,

    /// Transport settings shared by every probe
    #[serde(default)]
    pub transport: TransportConfig,

    /// What to do with probes still running when a round times out
    #[serde(default)]
    pub abandon_policy: AbandonPolicy,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_urls: Vec::new(),
            round_timeout_ms: default_round_timeout_ms(),
            round_count: default_round_count(),
            wait_ms: default_wait_ms(),
            report_interval_secs: default_report_interval_secs(),
            quiet: false,
            transport: TransportConfig::default(),
            abandon_policy: AbandonPolicy::default(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    pub fn round_timeout(&self) -> Duration {
        Duration::from_millis(self.round_timeout_ms)
    }

    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    pub fn report_interval(&self) -> Duration {
        Duration::from_secs(self.report_interval_secs)
    }

    /// Validate the numeric parameters and the URL list
    pub fn validate(&self) -> Result<()> {
        if self.target_urls.is_empty() {
            return Err(AppError::validation("not enough arguments: at least one URL is required"));
        }

        for url in &self.target_urls {
            crate::config::validation::validate_target_url(url)?;
        }

        if self.round_count == 0 {
            return Err(AppError::config("Round count must be greater than 0"));
        }

        if self.report_interval_secs == 0 {
            return Err(AppError::config("Report interval must be greater than 0"));
        }

        Ok(())
    }
}

/// Transport settings fixed for the whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Connect to this IP instead of the resolved address
    pub ip_override: Option<IpAddr>,
    /// Connect to this port instead of the URL's port
    pub port_override: Option<u16>,
    /// Accept invalid TLS certificates
    pub skip_tls_verify: bool,
}

impl TransportConfig {
    pub fn has_destination_override(&self) -> bool {
        self.ip_override.is_some() || self.port_override.is_some()
    }

    /// Rewrite `url` to the overridden destination.
    ///
    /// Host names are left alone because the client's resolver pins them to
    /// the override IP; only IP-literal hosts and ports need rewriting.
    /// Returns `None` when the URL is used as-is.
    pub fn request_target(&self, url: &Url) -> Result<Option<Url>> {
        if !self.has_destination_override() {
            return Ok(None);
        }

        let mut target = url.clone();

        if let Some(port) = self.port_override {
            target
                .set_port(Some(port))
                .map_err(|_| AppError::validation(format!("cannot set port {} on {}", port, url)))?;
        }

        if let Some(ip) = self.ip_override {
            if matches!(url.host(), Some(Host::Ipv4(_)) | Some(Host::Ipv6(_))) {
                target
                    .set_ip_host(ip)
                    .map_err(|_| AppError::validation(format!("cannot set host {} on {}", ip, url)))?;
            }
        }

        if target == *url {
            Ok(None)
        } else {
            Ok(Some(target))
        }
    }
}

/// `host[:port]` as the client would have sent it without overrides
pub fn original_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

fn default_round_timeout_ms() -> u64 {
    crate::defaults::DEFAULT_ROUND_TIMEOUT.as_millis() as u64
}

fn default_round_count() -> u32 {
    crate::defaults::DEFAULT_ROUND_COUNT
}

fn default_wait_ms() -> u64 {
    crate::defaults::DEFAULT_WAIT.as_millis() as u64
}

fn default_report_interval_secs() -> u64 {
    crate::defaults::DEFAULT_REPORT_INTERVAL.as_secs()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
