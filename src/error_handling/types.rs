//! Error type definitions.

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors produced while resolving a URL to its final destination.
#[derive(Error, Debug)]
pub enum UnshortenError {
    /// The URL may not be contacted: disallowed scheme, a host resolving to a
    /// private or reserved address, or a hostname with no usable address.
    ///
    /// The `Display` form is deliberately uniform across all of these causes
    /// so that surfacing the error to an end user does not reveal which check
    /// fired; `reason` exists for logs only.
    #[error("address not allowed")]
    AddressNotAllowed {
        /// Which check rejected the URL. Logged, never shown to end users.
        reason: String,
    },

    /// The redirect chain would exceed the configured budget.
    #[error("maximum number of allowed redirects reached")]
    RedirectBudgetExceeded,

    /// An HTTP request failed at the transport level (timeout, refused
    /// connection, TLS failure). Propagated unmodified.
    #[error("HTTP request error: {0}")]
    Http(#[from] ReqwestError),

    /// A DNS query failed for a reason other than "no such record"
    /// (resolver timeout, refused, protocol error). Propagated unmodified.
    #[error("DNS resolution error: {0}")]
    Dns(#[from] ResolveError),

    /// The system host-table lookup failed in a non-absorbable way.
    #[error("host lookup error: {0}")]
    HostLookup(#[from] std::io::Error),
}

impl UnshortenError {
    /// Builds an [`UnshortenError::AddressNotAllowed`] with an internal reason.
    pub(crate) fn not_allowed(reason: impl Into<String>) -> Self {
        UnshortenError::AddressNotAllowed {
            reason: reason.into(),
        }
    }

    /// Whether this error is a policy decision (as opposed to a transient
    /// network failure the caller may retry or route around).
    pub fn is_policy(&self) -> bool {
        matches!(
            self,
            UnshortenError::AddressNotAllowed { .. } | UnshortenError::RedirectBudgetExceeded
        )
    }
}
