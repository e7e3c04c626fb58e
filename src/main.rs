//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `unshorten` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use unshorten::config::{DEFAULT_MAX_REDIRECTS, HTTP_TIMEOUT_SECS};
use unshorten::initialization::init_logger_with;
use unshorten::{Config, LogFormat, LogLevel, Unshortener};

/// Resolve a URL to its final destination, refusing private and reserved addresses.
#[derive(Parser, Debug)]
#[command(name = "unshorten", version)]
struct Cli {
    /// URL to resolve (include the scheme, e.g. https://...)
    url: String,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    max_redirects: usize,

    /// Allow private/loopback addresses (trusted environments only)
    #[arg(long)]
    allow_private_addresses: bool,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    timeout: u64,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config {
        allow_private_addresses: cli.allow_private_addresses,
        max_redirects: cli.max_redirects,
        http_timeout: Duration::from_secs(cli.timeout),
        ..Default::default()
    };

    let unshortener = Unshortener::new(config).context("Failed to initialize resolver")?;

    match unshortener.resolve(&cli.url).await {
        Ok(final_url) => {
            println!("{final_url}");
            Ok(())
        }
        Err(e) => {
            eprintln!("unshorten error: {e}");
            process::exit(1);
        }
    }
}
