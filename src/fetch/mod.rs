//! HTTP transport and redirect chain resolution.
//!
//! The follower owns redirect semantics: the HTTP client it rides on has
//! client-side redirect following disabled, every hop is validated against
//! the host policy before a request is issued, and a fresh cookie jar is
//! shared across the hops of one resolution only.

mod client;
mod redirects;

// Re-export public API
pub use client::{build_hop_client, ReqwestTransport};
pub use redirects::{HopResponse, RedirectFollower, RedirectTransport};
