//! Configuration types.
//!
//! This module defines the library [`Config`] struct and the log level/format
//! enums shared between the library and the CLI binary.

use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS, HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Constructed once per process (or per embedding caller) and treated as
/// read-only afterwards; concurrent resolutions share it by reference.
///
/// # Examples
///
/// ```no_run
/// use unshorten::Config;
///
/// let config = Config {
///     max_redirects: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Skip the host policy entirely and contact any address.
    ///
    /// An explicit escape hatch for trusted or test environments, never the
    /// default: with this set, loopback and RFC 1918 targets are reachable.
    pub allow_private_addresses: bool,

    /// Maximum number of redirects followed by one resolution.
    pub max_redirects: usize,

    /// Per-request HTTP timeout (covers connect, TLS handshake, and headers).
    pub http_timeout: Duration,

    /// Timeout for each DNS query.
    pub dns_timeout: Duration,

    /// User-Agent header sent on every hop.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_private_addresses: false,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
