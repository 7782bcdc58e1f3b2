//! Pitaya - a Rust library for the content model of plain-text slide decks
//!
//! This library parses the line-based slide-deck convention used by
//! markdown-driven presentation tools into an immutable in-memory model,
//! and serializes the model back to text.
//!
//! # Features
//!
//! - **Deck model**: slides, incremental-reveal fragments, and typed
//!   content blocks (headings, paragraphs, lists, code, images, tables)
//! - **Permissive parser**: unrecognized syntax degrades to paragraph text
//!   instead of failing; the only hard error is an unterminated code fence
//! - **Round-trip serialization**: canonical input reproduces byte-for-byte
//! - **Text extraction**: plain-text view of a deck for search and indexing
//! - **Parallel rendering**: large decks serialize slide-by-slide across
//!   worker threads
//!
//! # Example - Parsing deck text
//!
//! ```
//! use pitaya::Deck;
//!
//! # fn main() -> Result<(), pitaya::Error> {
//! let deck = Deck::parse("# Strategies\n---\nFirst point\n+++\nSecond point")?;
//!
//! // Slides are split on `---`-only lines
//! assert_eq!(deck.slide_count(), 2);
//!
//! // Fragments are split on `+++`-only lines within a slide
//! assert_eq!(deck.slides()[1].fragment_count(), 2);
//!
//! // The first heading doubles as the deck title
//! assert_eq!(deck.title(), Some("Strategies"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Round-tripping
//!
//! ```
//! use pitaya::{Deck, ToMarkdown};
//!
//! # fn main() -> Result<(), pitaya::Error> {
//! let source = "# Title\n\n---\n\n```javascript\nconst x = 1;\n```\n";
//! let deck = Deck::parse(source)?;
//!
//! // Canonical input reproduces byte-for-byte
//! assert_eq!(deck.to_markdown()?, source);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a deck file
//!
//! ```no_run
//! use pitaya::Deck;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = Deck::open("talk.md")?;
//!
//! for (i, slide) in deck.slides().iter().enumerate() {
//!     println!("Slide {}: {} fragment(s)", i + 1, slide.fragment_count());
//! }
//! # Ok(())
//! # }
//! ```

/// Common types and utilities
///
/// This module provides the unified error type and `Result` alias used
/// across the library.
pub mod common;

/// Deck model
///
/// This module provides the immutable in-memory representation of a deck:
/// slides, fragments, and typed content blocks.
pub mod deck;

/// Deck text serialization
///
/// This module writes a parsed deck back to the textual convention,
/// organized around the `ToMarkdown` trait.
pub mod markdown;

// Line-oriented parsing lives behind `Deck::parse`.
mod parser;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use deck::{
    Block, Code, Deck, DeckStats, Fragment, Heading, Image, List, ListItem, ListKind, Paragraph,
    Slide, Table, TableRow, canonical_language,
};
pub use markdown::{MarkdownOptions, ToMarkdown};
