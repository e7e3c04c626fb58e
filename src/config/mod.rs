//! Library configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, redirect budget, user agent)
//! - The [`Config`] struct consumed by the resolver
//! - Log level/format option types shared with the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
