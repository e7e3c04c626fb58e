//! unshorten library: SSRF-safe URL resolution
//!
//! This library resolves a user-supplied, untrusted URL to its final
//! destination by following HTTP redirects, while guaranteeing that no
//! request is ever issued to a private, loopback, link-local, or otherwise
//! non-public network address - even when such an address is only reached
//! after several redirects from an apparently public starting URL.
//!
//! It returns the final landing URL, never page content; fetching, scraping,
//! and retry/fallback across data sources belong to the caller.
//!
//! # Example
//!
//! ```no_run
//! use unshorten::{Config, Unshortener};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let unshortener = Unshortener::new(Config::default())?;
//! let final_url = unshortener.resolve("https://bit.ly/example").await?;
//! println!("{final_url}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
mod fetch;
pub mod initialization;
mod security;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{HostLookup, LookupOutcome, SystemHostLookup};
pub use error_handling::{InitializationError, UnshortenError};
pub use fetch::{HopResponse, RedirectFollower, RedirectTransport, ReqwestTransport};
pub use resolve::Unshortener;
pub use security::{is_public_ip, HostValidator};

// Internal facade module wiring the collaborators together
mod resolve {
    use std::sync::Arc;

    use hickory_resolver::TokioAsyncResolver;
    use log::debug;

    use crate::config::Config;
    use crate::dns::SystemHostLookup;
    use crate::error_handling::{InitializationError, UnshortenError};
    use crate::fetch::{RedirectFollower, ReqwestTransport};
    use crate::initialization::init_resolver;
    use crate::security::HostValidator;

    /// Resolves untrusted URLs to their final destination.
    ///
    /// Owns the process-wide DNS resolver and configuration; safe to share
    /// across tasks. Each [`resolve`](Unshortener::resolve) call gets its own
    /// HTTP client and cookie jar, so concurrent resolutions share no mutable
    /// state.
    pub struct Unshortener {
        resolver: Arc<TokioAsyncResolver>,
        config: Config,
    }

    impl Unshortener {
        /// Creates a resolver facade from the given configuration.
        ///
        /// # Errors
        ///
        /// Returns [`InitializationError`] if the DNS resolver cannot be
        /// constructed.
        pub fn new(config: Config) -> Result<Self, InitializationError> {
            let resolver = init_resolver(config.dns_timeout)?;
            Ok(Self { resolver, config })
        }

        /// Resolves `url` to its final URL, following at most
        /// `max_redirects` redirects and validating every hop.
        ///
        /// The caller is responsible for default-scheme normalization; a
        /// scheme-less input is treated as a relative reference by the host
        /// policy.
        ///
        /// # Errors
        ///
        /// Policy rejections ([`UnshortenError::AddressNotAllowed`],
        /// [`UnshortenError::RedirectBudgetExceeded`]) are terminal;
        /// transient network kinds are propagated unmodified for the caller
        /// to retry or route around.
        pub async fn resolve(&self, url: &str) -> Result<String, UnshortenError> {
            debug!("resolving {url}");
            // Fresh client and cookie jar per resolution: cookies travel
            // across the hops of this call and no further.
            let transport = ReqwestTransport::new(&self.config)?;
            let lookup = SystemHostLookup::new(Arc::clone(&self.resolver));
            let validator = HostValidator::new(&lookup, &self.config);
            let follower = RedirectFollower::new(validator, &transport, &self.config);
            follower.resolve(url).await
        }
    }
}
