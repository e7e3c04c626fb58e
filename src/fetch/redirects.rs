//! Bounded redirect chain resolution.
//!
//! Follows a redirect chain hop by hop: each hop is validated against the
//! host policy, requested, and its `Location` (or `Content-Location`) header
//! inspected for the next hop. The chain terminates on a response with no
//! next candidate, a disallowed host, or an exhausted redirect budget.

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, CONTENT_LOCATION, LOCATION};
use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::error_handling::UnshortenError;
use crate::security::HostValidator;

/// Status line and headers of one hop's response. The body is never read.
pub struct HopResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Response headers; only `Location` and `Content-Location` are consulted.
    pub headers: HeaderMap,
}

/// Issues one GET request per hop on behalf of the follower.
///
/// Implementations must not follow redirects themselves; the follower owns
/// redirect semantics.
#[async_trait]
pub trait RedirectTransport: Send + Sync {
    /// Issues a GET to `url` and returns the response status and headers.
    async fn get(&self, url: &str) -> Result<HopResponse, UnshortenError>;
}

/// Follows a redirect chain from an initial URL to its final destination.
pub struct RedirectFollower<'a> {
    validator: HostValidator<'a>,
    transport: &'a dyn RedirectTransport,
    config: &'a Config,
}

impl<'a> RedirectFollower<'a> {
    /// Creates a follower over the given validator and transport.
    pub fn new(
        validator: HostValidator<'a>,
        transport: &'a dyn RedirectTransport,
        config: &'a Config,
    ) -> Self {
        Self {
            validator,
            transport,
            config,
        }
    }

    /// Resolves `initial_url` to its final URL, following at most
    /// `max_redirects` redirects.
    ///
    /// Every hop, including the first, is validated before its request is
    /// issued; a disallowed hop anywhere in the chain aborts the resolution
    /// with no request sent to that host. The budget check runs before
    /// following, so `max_redirects = 5` permits exactly 5 redirects (6
    /// requests) and refuses the 6th redirect without a 7th request.
    ///
    /// # Errors
    ///
    /// [`UnshortenError::AddressNotAllowed`] when a hop fails the host
    /// policy, [`UnshortenError::RedirectBudgetExceeded`] when the chain is
    /// too long, or a transient kind when a request or lookup fails.
    pub async fn resolve(&self, initial_url: &str) -> Result<String, UnshortenError> {
        let mut hop = initial_url.to_string();
        let mut seen_redirects: usize = 0;

        loop {
            self.validator.validate(&hop).await?;

            let response = self.transport.get(&hop).await?;
            debug!("GET {hop} -> {}", response.status);

            let Some(candidate) = next_hop_candidate(&response.headers, &hop) else {
                debug!("{initial_url} settled at {hop} after {seen_redirects} redirect(s)");
                return Ok(hop);
            };

            let next = resolve_candidate(&hop, &candidate)?;

            // Checked before following, never after: the N+1th redirect must
            // not cost a request.
            if seen_redirects == self.config.max_redirects {
                info!(
                    "Redirect budget of {} exhausted resolving {initial_url}",
                    self.config.max_redirects
                );
                return Err(UnshortenError::RedirectBudgetExceeded);
            }
            seen_redirects += 1;
            debug!("redirect {seen_redirects}: {hop} -> {next}");
            hop = next;
        }
    }
}

/// Picks the next-hop candidate from a response's headers.
///
/// `Location` wins; `Content-Location` is consulted only when `Location` is
/// absent. A missing header or a candidate equal to the current hop
/// (self-redirect) ends the chain. Headers are honored regardless of status
/// code: some origins attach `Location` to non-3xx responses.
fn next_hop_candidate(headers: &HeaderMap, current: &str) -> Option<String> {
    let raw = headers
        .get(LOCATION)
        .or_else(|| headers.get(CONTENT_LOCATION))?;
    let value = raw.to_str().ok()?;
    if value.is_empty() || value == current {
        None
    } else {
        Some(value.to_string())
    }
}

/// Turns a redirect target into an absolute URL.
///
/// Relative targets are resolved against the current hop, not the original
/// URL, matching how a browser would land.
fn resolve_candidate(current: &str, candidate: &str) -> Result<String, UnshortenError> {
    match Url::parse(candidate) {
        Ok(url) => Ok(url.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(current).map_err(|e| {
                UnshortenError::not_allowed(format!("unparseable base URL {current}: {e}"))
            })?;
            let joined = base.join(candidate).map_err(|e| {
                UnshortenError::not_allowed(format!(
                    "cannot resolve redirect target {candidate}: {e}"
                ))
            })?;
            Ok(joined.to_string())
        }
        Err(e) => Err(UnshortenError::not_allowed(format!(
            "unparseable redirect target {candidate}: {e}"
        ))),
    }
}
