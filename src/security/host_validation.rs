//! URL host validation.
//!
//! Applies the contact policy to a single URL before any request is issued:
//! only `http`/`https` schemes, and every address the host resolves to must
//! be publicly routable. Hostnames are resolved through three independent
//! lookups (system host table, A records, AAAA records) whose answers are
//! unioned, so a host that resolves publicly over IPv4 but privately over
//! IPv6 is still rejected.

use std::collections::HashSet;
use std::net::IpAddr;

use log::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::dns::{HostLookup, LookupOutcome};
use crate::error_handling::UnshortenError;
use crate::security::address::is_public_ip;

/// Decides whether a URL's host may be contacted.
///
/// Holds its DNS collaborator and configuration by reference; one validator
/// serves all hops of a single resolution.
pub struct HostValidator<'a> {
    lookup: &'a dyn HostLookup,
    config: &'a Config,
}

impl<'a> HostValidator<'a> {
    /// Creates a validator using the given lookup collaborator and config.
    pub fn new(lookup: &'a dyn HostLookup, config: &'a Config) -> Self {
        Self { lookup, config }
    }

    /// Validates that `url_str` may be contacted, returning it unchanged on
    /// success.
    ///
    /// A bare relative reference (no hostname) passes through untouched so a
    /// redirect target can be checked before it is joined to a base URL; the
    /// caller is expected to validate the joined absolute form again before
    /// requesting it.
    ///
    /// # Errors
    ///
    /// [`UnshortenError::AddressNotAllowed`] for a disallowed scheme, a
    /// non-public address, or a hostname with no usable records. Resolver
    /// failures that leave the address set empty propagate as their transient
    /// kinds instead.
    pub async fn validate(&self, url_str: &str) -> Result<String, UnshortenError> {
        if self.config.allow_private_addresses {
            debug!("private addresses allowed by configuration, skipping host check for {url_str}");
            return Ok(url_str.to_string());
        }

        let url = match Url::parse(url_str) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                // A scheme-relative reference (//host/path) names a host
                // without committing to a scheme; the scheme rule rejects it.
                if url_str.trim_start().starts_with("//") {
                    warn!("Blocked scheme-relative URL: {url_str}");
                    return Err(UnshortenError::not_allowed(format!(
                        "scheme-relative URL not allowed: {url_str}"
                    )));
                }
                // Bare relative reference; nothing to validate until it is
                // joined to a base.
                debug!("no hostname in {url_str}, passing through");
                return Ok(url_str.to_string());
            }
            Err(e) => {
                warn!("Failed to parse URL {url_str}: {e}");
                return Err(UnshortenError::not_allowed(format!(
                    "unparseable URL {url_str}: {e}"
                )));
            }
        };

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                warn!("Blocked scheme '{scheme}' in {url_str}");
                return Err(UnshortenError::not_allowed(format!(
                    "scheme '{scheme}' not allowed"
                )));
            }
        }

        match url.host() {
            // http/https URLs always carry a host after parsing; kept for completeness.
            None => {
                debug!("no hostname in {url_str}, passing through");
            }
            Some(url::Host::Ipv4(ip)) => self.check_literal(IpAddr::V4(ip), url_str)?,
            Some(url::Host::Ipv6(ip)) => self.check_literal(IpAddr::V6(ip), url_str)?,
            Some(url::Host::Domain(domain)) => {
                let addrs = self.resolve_merged(domain).await?;
                for addr in &addrs {
                    if !is_public_ip(*addr) {
                        warn!("Blocked {url_str}: {domain} resolves to non-public address {addr}");
                        return Err(UnshortenError::not_allowed(format!(
                            "hostname {domain} resolves to non-public address {addr}"
                        )));
                    }
                }
                debug!(
                    "{domain} resolves to {} public address(es), allowing",
                    addrs.len()
                );
            }
        }

        Ok(url_str.to_string())
    }

    fn check_literal(&self, ip: IpAddr, url_str: &str) -> Result<(), UnshortenError> {
        if is_public_ip(ip) {
            debug!("{ip} is public, allowing {url_str}");
            Ok(())
        } else {
            warn!("Blocked {url_str}: non-public address literal {ip}");
            Err(UnshortenError::not_allowed(format!(
                "non-public address {ip}"
            )))
        }
    }

    /// Unions host-table, A, and AAAA answers for `host`.
    ///
    /// A lookup that merely finds no records contributes nothing; a lookup
    /// that fails outright is absorbed as long as some other lookup produced
    /// addresses, and surfaces as the transient failure when none did. An
    /// empty set with no failure means the hostname does not exist, which is
    /// a policy rejection.
    async fn resolve_merged(&self, host: &str) -> Result<HashSet<IpAddr>, UnshortenError> {
        let mut addrs: HashSet<IpAddr> = HashSet::new();
        let mut failure: Option<UnshortenError> = None;

        for outcome in [
            self.lookup.host_table(host).await,
            self.lookup.ipv4(host).await,
            self.lookup.ipv6(host).await,
        ] {
            match outcome {
                LookupOutcome::Found(found) => addrs.extend(found),
                LookupOutcome::NoRecords => {}
                LookupOutcome::Failed(e) => {
                    debug!("lookup failure for {host}: {e}");
                    failure = Some(e);
                }
            }
        }

        if addrs.is_empty() {
            return match failure {
                // Transient resolver trouble, not a policy call; let the
                // caller decide whether to retry.
                Some(e) => Err(e),
                None => {
                    warn!("Hostname {host} did not resolve to any address");
                    Err(UnshortenError::not_allowed(format!(
                        "hostname {host} did not resolve to any address"
                    )))
                }
            };
        }

        Ok(addrs)
    }
}
