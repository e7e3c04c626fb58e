//! Shared resource initialization.
//!
//! This module provides functions to initialize the resources one process
//! shares across all resolutions:
//! - Logger (env_logger with plain/JSON formats)
//! - DNS resolver (hickory, with aggressive timeouts)
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
