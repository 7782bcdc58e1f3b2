//! Unified error types for the pitaya library.
//!
//! This module provides a single error type that covers the parse, encoding,
//! and I/O failure modes, presenting a consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
