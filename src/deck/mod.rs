//! Unified deck model module.
//!
//! This module provides the in-memory model of a slide deck: an ordered
//! sequence of slides, each an ordered sequence of fragments (incremental
//! reveals), each an ordered sequence of typed content blocks. The model is
//! read-only data produced once from source text.
//!
//! # Architecture
//!
//! - [`Deck`]: the main entry point (parse, open, accessors)
//! - [`Slide`]: one screen, holding fragments
//! - [`Fragment`]: one incremental reveal, holding blocks
//! - [`Block`]: a tagged content variant (heading, paragraph, list, code,
//!   image, table)
//!
//! # Example
//!
//! ```rust
//! use pitaya::Deck;
//!
//! let deck = Deck::parse("# Declarative vs imperative\n---\nBenchmarks")?;
//!
//! // Access slides
//! assert_eq!(deck.slide_count(), 2);
//! for slide in deck.slides() {
//!     println!("{}", slide.text());
//! }
//! # Ok::<(), pitaya::Error>(())
//! ```

// Submodule declarations
mod block;
mod language;
mod slide;
mod stats;

// Re-exports
pub use block::{Block, Code, Heading, Image, List, ListItem, ListKind, Paragraph, Table, TableRow};
pub use language::canonical_language;
pub use slide::{Fragment, Slide};
pub use stats::DeckStats;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::Result;

/// A slide deck.
///
/// This is the main entry point for working with deck text. A deck is built
/// once by [`Deck::parse`] (or the file and byte convenience constructors)
/// and is immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use pitaya::Deck;
///
/// let deck = Deck::parse("# Title\n---\nBody text")?;
/// assert_eq!(deck.slide_count(), 2);
/// assert_eq!(deck.title(), Some("Title"));
/// # Ok::<(), pitaya::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Parse deck text into the model.
    ///
    /// Lines consisting solely of `---` begin a new slide and lines
    /// consisting solely of `+++` begin a new fragment; triple-backtick
    /// fences delimit code blocks. All input is accepted permissively —
    /// unrecognized syntax degrades to paragraph text — except for a code
    /// fence left open at end of input, which fails with
    /// [`Error::UnterminatedFence`](crate::Error::UnterminatedFence).
    ///
    /// A leading UTF-8 BOM is stripped before parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pitaya::Deck;
    ///
    /// let deck = Deck::parse("# Title\n---\nBody text")?;
    /// assert_eq!(deck.slide_count(), 2);
    /// # Ok::<(), pitaya::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse_deck(text)
    }

    /// Open a deck from a file path.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use pitaya::Deck;
    ///
    /// let deck = Deck::open("talk.md")?;
    /// println!("Slides: {}", deck.slide_count());
    /// # Ok::<(), pitaya::Error>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Create a deck from a byte buffer.
    ///
    /// This is the entry point for in-memory content, such as network data,
    /// without creating temporary files. The bytes must be valid UTF-8; a
    /// leading BOM is accepted and stripped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pitaya::Deck;
    ///
    /// let deck = Deck::from_bytes(b"# Title".to_vec())?;
    /// assert_eq!(deck.title(), Some("Title"));
    /// # Ok::<(), pitaya::Error>(())
    /// ```
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let text = String::from_utf8(bytes)?;
        Self::parse(&text)
    }

    pub(crate) fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// The slides of the deck, in presentation order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides in the deck.
    ///
    /// Every deck has at least one slide, even when the input is empty.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Iterate over all blocks of the deck, across slides and fragments,
    /// in order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.slides.iter().flat_map(Slide::blocks)
    }

    /// The deck title: the text of the first heading block, if any.
    pub fn title(&self) -> Option<&str> {
        self.blocks()
            .find_map(Block::as_heading)
            .map(|heading| heading.text.as_str())
    }

    /// Get all plain text content from the deck.
    ///
    /// This extracts the text of every block payload, for search and
    /// indexing. Slides are separated by a blank line.
    pub fn text(&self) -> String {
        let parts: Vec<String> = self
            .slides
            .iter()
            .map(Slide::text)
            .filter(|text| !text.is_empty())
            .collect();
        parts.join("\n\n")
    }

    /// Compute summary statistics for the deck.
    pub fn stats(&self) -> DeckStats {
        DeckStats::collect(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use std::io::Write;

    #[test]
    fn open_reads_a_deck_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Title\n---\nBody text").unwrap();
        let deck = Deck::open(file.path()).unwrap();
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.title(), Some("Title"));
    }

    #[test]
    fn open_surfaces_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.md");
        let err = Deck::open(&missing).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn from_bytes_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"# Title");
        let deck = Deck::from_bytes(bytes).unwrap();
        assert_eq!(deck.title(), Some("Title"));
    }

    #[test]
    fn from_bytes_rejects_invalid_utf8() {
        let err = Deck::from_bytes(vec![0xFF, 0xFE, 0x00]).unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding(_)));
    }

    #[test]
    fn title_is_the_first_heading_anywhere() {
        let deck = Deck::parse("prose only\n---\n## Late title").unwrap();
        assert_eq!(deck.title(), Some("Late title"));
        assert_eq!(Deck::parse("no headings").unwrap().title(), None);
    }

    #[test]
    fn text_joins_slides_with_blank_lines() {
        let deck = Deck::parse("# One\n---\ntwo").unwrap();
        assert_eq!(deck.text(), "One\n\ntwo");
    }
}
