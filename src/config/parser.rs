//! Configuration parsing from CLI arguments

use crate::{
    cli::Cli,
    config::validation::validate_target_url,
    error::{AppError, Result},
    models::{Config, TransportConfig},
};

/// Builds the run configuration from parsed CLI arguments
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        if self.cli.urls.is_empty() {
            return Err(AppError::validation("not enough arguments: at least one URL is required"));
        }

        let target_urls = self
            .cli
            .urls
            .iter()
            .map(|raw| validate_target_url(raw))
            .collect::<Result<Vec<_>>>()?;

        let config = Config {
            target_urls,
            round_timeout_ms: self.cli.timeout,
            round_count: self.cli.count,
            wait_ms: self.cli.wait,
            report_interval_secs: self.cli.report_interval,
            quiet: self.cli.quiet,
            transport: TransportConfig {
                ip_override: self.cli.ip,
                port_override: self.cli.port,
                skip_tls_verify: self.cli.insecure,
            },
            abandon_policy: self.cli.on_timeout,
            enable_color: self.cli.use_colors(),
            verbose: self.cli.verbose,
            debug: self.cli.debug,
        };

        config.validate()?;

        Ok(config)
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Configuration summary for debug output
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Target URLs: {}", config.target_urls.join(", ")));
    summary.push(format!("Rounds: {}", config.round_count));
    summary.push(format!("Round timeout: {:?}", config.round_timeout()));
    summary.push(format!("Wait between rounds: {:?}", config.wait()));
    summary.push(format!("Report interval: {:?}", config.report_interval()));
    summary.push(format!("On timeout: {}", config.abandon_policy.as_str()));
    if let Some(ip) = config.transport.ip_override {
        summary.push(format!("IP override: {}", ip));
    }
    if let Some(port) = config.transport.port_override {
        summary.push(format!("Port override: {}", port));
    }
    summary.push(format!("Skip TLS verification: {}", config.transport.skip_tls_verify));

    summary.join("\n")
}
