//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for A/AAAA lookups.
///
/// Creates a resolver with aggressive timeouts to prevent a slow or
/// unresponsive DNS server from stalling a resolution. The resolver is safe
/// for concurrent use and is shared across all resolutions of one process.
///
/// # Arguments
///
/// * `timeout` - Per-query timeout (see [`crate::Config::dns_timeout`])
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across
/// tasks, or an error if initialization fails.
pub fn init_resolver(timeout: Duration) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 2; // Reduce retry attempts to fail faster
                       // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
