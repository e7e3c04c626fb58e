//! Error types for resolution and initialization.
//!
//! Error kinds are distinguished structurally so callers pattern-match on the
//! variant rather than inspecting messages:
//! - **Policy errors** ([`UnshortenError::AddressNotAllowed`],
//!   [`UnshortenError::RedirectBudgetExceeded`]) are terminal and never worth
//!   retrying.
//! - **Transient errors** ([`UnshortenError::Http`], [`UnshortenError::Dns`],
//!   [`UnshortenError::HostLookup`]) wrap the underlying network failure
//!   unmodified; retry and fallback policy belongs to the caller.

mod types;

// Re-export public API
pub use types::{InitializationError, UnshortenError};
