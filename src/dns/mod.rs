//! Hostname resolution collaborators.
//!
//! The host policy merges addresses from three independent lookups: the
//! system host table, DNS A records, and DNS AAAA records. A host that
//! answers only on one record family, or that gives split answers across
//! families, is still fully visible to the policy.
//!
//! [`HostLookup`] is the injection seam; [`SystemHostLookup`] is the
//! production implementation backed by `hickory-resolver` and
//! `tokio::net::lookup_host`.

mod resolution;

use std::net::IpAddr;

use async_trait::async_trait;

use crate::error_handling::UnshortenError;

// Re-export public API
pub use resolution::SystemHostLookup;

/// Outcome of a single record-family lookup attempt.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The lookup returned one or more addresses.
    Found(Vec<IpAddr>),
    /// The lookup completed but the host has no records of this family.
    /// Contributes nothing to the merged set and is not an error.
    NoRecords,
    /// The lookup failed outright (resolver timeout, refused, protocol
    /// error). Absorbed when another lookup produced addresses; surfaced
    /// when the merged set would otherwise be empty.
    Failed(UnshortenError),
}

/// A source of addresses for a hostname, split by record family.
///
/// Implementations must be safe for concurrent use; one instance is shared
/// across all in-flight resolutions.
#[async_trait]
pub trait HostLookup: Send + Sync {
    /// Looks the host up in the system host table (getaddrinfo path).
    async fn host_table(&self, host: &str) -> LookupOutcome;

    /// Resolves A records for the host.
    async fn ipv4(&self, host: &str) -> LookupOutcome;

    /// Resolves AAAA records for the host.
    async fn ipv6(&self, host: &str) -> LookupOutcome;
}
