//! Unified error types for the pitaya library.
//!
//! Deck text is free-form prose, so almost nothing is rejected: unrecognized
//! syntax degrades to paragraph content instead of failing. The one
//! structural failure is a code fence that is never closed, since silently
//! repairing a truncated fence could corrupt the document.
use thiserror::Error;

/// Main error type for deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("Invalid encoding: deck text must be UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// A code fence was opened but never closed before end of input
    #[error("Malformed deck: code fence opened on line {line} is never closed")]
    UnterminatedFence {
        /// 1-based line number of the opening fence
        line: usize,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;
