//! Configuration validation utilities and rules

use crate::{
    error::{AppError, Result},
    models::Config,
};
use url::Url;

/// Parse a target URL and check that it can be probed.
///
/// Returns the normalized form the prober will request.
pub fn validate_target_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::validation(format!("cannot parse {} as url: {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(AppError::validation(format!("unsupported url scheme in {}", raw))),
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AppError::validation(format!("url {} must have a host", raw)));
    }

    Ok(parsed.to_string())
}

/// Non-fatal observations about a valid configuration
pub struct ConfigValidator;

impl ConfigValidator {
    /// Settings that are legal but probably not what the user meant
    pub fn warnings(config: &Config) -> Vec<String> {
        let mut warnings = Vec::new();

        if config.round_timeout_ms == 0 {
            warnings.push("round timeout is 0ms, rounds will almost always time out".to_string());
        }

        if config.transport.skip_tls_verify
            && !config.target_urls.iter().any(|u| u.starts_with("https:"))
        {
            warnings.push("-k has no effect: no https URL given".to_string());
        }

        let budget = config.round_timeout() + config.wait();
        if config.round_count > 1 && config.report_interval() < budget {
            warnings.push(format!(
                "report interval {:?} is shorter than one round ({:?}), a report follows every round",
                config.report_interval(),
                budget
            ));
        }

        warnings
    }
}
