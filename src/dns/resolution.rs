//! Production host lookup backed by hickory-resolver.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::dns::{HostLookup, LookupOutcome};
use crate::error_handling::UnshortenError;

/// [`HostLookup`] implementation combining the system host table with
/// A/AAAA queries against the shared DNS resolver.
pub struct SystemHostLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl SystemHostLookup {
    /// Creates a lookup backed by the given resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl HostLookup for SystemHostLookup {
    async fn host_table(&self, host: &str) -> LookupOutcome {
        // getaddrinfo path; sees /etc/hosts entries the DNS queries below never do.
        match tokio::net::lookup_host((host, 0u16)).await {
            Ok(addrs) => {
                let addrs: Vec<IpAddr> = addrs.map(|sa| sa.ip()).collect();
                if addrs.is_empty() {
                    LookupOutcome::NoRecords
                } else {
                    LookupOutcome::Found(addrs)
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                LookupOutcome::Failed(UnshortenError::HostLookup(e))
            }
            Err(e) => {
                // getaddrinfo reports "name not found" as a plain error; treat
                // it as an empty answer and let the DNS queries have their say.
                debug!("host-table lookup for {host} returned nothing: {e}");
                LookupOutcome::NoRecords
            }
        }
    }

    async fn ipv4(&self, host: &str) -> LookupOutcome {
        match self.resolver.ipv4_lookup(host).await {
            Ok(lookup) => LookupOutcome::Found(lookup.iter().map(|a| IpAddr::V4(a.0)).collect()),
            Err(e) => classify_resolve_error(host, "A", e),
        }
    }

    async fn ipv6(&self, host: &str) -> LookupOutcome {
        match self.resolver.ipv6_lookup(host).await {
            Ok(lookup) => {
                LookupOutcome::Found(lookup.iter().map(|aaaa| IpAddr::V6(aaaa.0)).collect())
            }
            Err(e) => classify_resolve_error(host, "AAAA", e),
        }
    }
}

/// Splits "no such record" from real resolver failures.
fn classify_resolve_error(host: &str, record: &str, e: ResolveError) -> LookupOutcome {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => {
            debug!("no {record} records for {host}");
            LookupOutcome::NoRecords
        }
        _ => LookupOutcome::Failed(UnshortenError::Dns(e)),
    }
}
