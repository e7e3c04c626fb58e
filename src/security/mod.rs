//! SSRF policy: address classification and host validation.
//!
//! This module decides which hosts the resolver may contact:
//! - [`address`] classifies a single IP as publicly routable or not (pure,
//!   no I/O).
//! - [`HostValidator`] applies the full policy to a URL, resolving hostnames
//!   through the system host table plus A and AAAA records and requiring
//!   every discovered address to be public.

mod address;
mod host_validation;

// Re-export public API
pub use address::{is_public_ip, is_public_ipv4, is_public_ipv6};
pub use host_validation::HostValidator;
