//! Deck text serialization.
//!
//! This module writes a parsed [`Deck`](crate::Deck) back to the textual
//! convention it was read from: `---`-only lines between slides, `+++`-only
//! lines between fragments, fenced code spans, and blocks separated by blank
//! lines.
//!
//! # Round-trip behavior
//!
//! Serialization is the inverse of parsing. For input already in canonical
//! form (one blank line between blocks and around separators, single
//! trailing newline) the output is byte-identical; any other well-formed
//! input round-trips to the same model with normalized spacing.
//!
//! # Architecture
//!
//! The module is organized around:
//! - [`ToMarkdown`] trait: core trait for types that serialize to deck text
//! - [`MarkdownOptions`]: configuration for serialization behavior
//! - `writer`: low-level writer for efficient output generation
//! - `deck`: implementations for the model types
//!
//! # Examples
//!
//! ```rust
//! use pitaya::{Deck, ToMarkdown};
//!
//! let source = "# Title\n\n---\n\nBody text\n";
//! let deck = Deck::parse(source)?;
//! assert_eq!(deck.to_markdown()?, source);
//! # Ok::<(), pitaya::Error>(())
//! ```
//!
//! Large decks may be rendered slide-by-slide in parallel; see
//! [`MarkdownOptions::with_parallel`].

// Module declarations
mod config;
mod deck;
mod traits;
mod writer;

// Re-export public API
pub use config::MarkdownOptions;
pub use traits::ToMarkdown;
