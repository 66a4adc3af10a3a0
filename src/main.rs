//! URL Timer - Main CLI Application
//!
//! Times HTTP(S) GET requests against the given URLs over repeated rounds
//! and prints per-request timings plus running min/avg/max statistics.

use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{debug, warn};
use url_timer::{
    cli::Cli,
    client::HttpProber,
    config::{display_config_summary, load_config, ConfigValidator},
    error::{AppError, Result},
    executor::{RoundCollector, RoundRunner, RunSettings},
    logging::init_logging,
    output::ReportWriter,
    PKG_NAME, VERSION,
};

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    // Argument errors exit with 1 rather than clap's default of 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            process::exit(1);
        }
        Err(e) => {
            let _ = e.print();
            process::exit(0);
        }
    };

    let use_color = cli.use_colors();

    if let Err(e) = run_application(cli).await {
        eprintln!("{}", e.format_for_console(use_color));
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    let config = load_config(cli)?;

    init_logging(&config)?;
    debug!("{} v{}", PKG_NAME, VERSION);
    debug!("configuration:\n{}", display_config_summary(&config));
    if let Ok(json) = serde_json::to_string(&config) {
        debug!(config = %json, "resolved configuration");
    }

    for warning in ConfigValidator::warnings(&config) {
        warn!("{}", warning);
    }

    let prober = Arc::new(HttpProber::new(config.transport.clone())?);
    let collector = RoundCollector::new(prober, config.abandon_policy);
    let runner = RoundRunner::new(collector, config.target_urls.clone(), RunSettings::from(&config));

    let mut output = ReportWriter::new(std::io::stdout());
    runner.run(&mut output).await?;

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        e if e.is_argument_error() => {
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  urltimer [OPTIONS] <url1> [<url2> .. <urln>]");
            eprintln!("  - URLs must start with http:// or https://");
            eprintln!("  - Run with --help for the full list of options");
        }
        AppError::Network(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check the -i and -p overrides");
            eprintln!("  - Verify TLS settings, -k skips certificate verification");
        }
        _ => {}
    }
}
