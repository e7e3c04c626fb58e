//! Configuration constants.
//!
//! Defaults for the redirect budget and network timeouts. All of these can be
//! overridden through [`crate::Config`].

/// Default maximum number of redirects followed by one resolution.
///
/// With a budget of 5, exactly 5 redirects may be followed (6 requests
/// including the first); the 6th redirect is refused before a 7th request.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// Network operation timeouts
/// DNS query timeout in seconds
/// Kept short - most DNS queries complete in <1s, 3s provides a good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Per-request HTTP timeout in seconds (covers connect, TLS handshake, and headers)
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Override via [`crate::Config::user_agent`] when an origin requires a
/// browser-looking agent to serve its redirect.
pub const DEFAULT_USER_AGENT: &str = concat!("unshorten/", env!("CARGO_PKG_VERSION"));
