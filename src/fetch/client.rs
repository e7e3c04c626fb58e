//! Per-resolution HTTP client construction.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::UnshortenError;
use crate::fetch::redirects::{HopResponse, RedirectTransport};

/// Builds the HTTP client used for the hops of a single resolution.
///
/// Creates a `reqwest::Client` with redirects disabled, so the follower can
/// validate every hop before it is requested, and with a fresh cookie jar:
/// a cookie set on hop 1 (consent/login interstitials) is replayed on hop 2,
/// but never leaks into an unrelated resolution.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn build_hop_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_provider(Arc::new(Jar::default()))
        .timeout(config.http_timeout)
        .user_agent(config.user_agent.clone())
        .build()
}

/// reqwest-backed [`RedirectTransport`].
///
/// Construct one per top-level resolution; the cookie jar lives inside the
/// wrapped client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh client and cookie jar.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if client creation fails.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_hop_client(config)?,
        })
    }
}

#[async_trait]
impl RedirectTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HopResponse, UnshortenError> {
        // GET, not HEAD: origins do not reliably mirror redirect behavior for HEAD.
        let response = self.client.get(url).send().await?;
        Ok(HopResponse {
            status: response.status(),
            headers: response.headers().clone(),
        })
    }
}
