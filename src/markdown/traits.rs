//! Core trait for deck serialization.
//!
//! This module defines the `ToMarkdown` trait that enables model types to
//! be written back to deck text.

use super::config::MarkdownOptions;
use crate::common::Result;

/// Core trait for types that can be serialized to deck text.
///
/// This trait is implemented for `Deck`, `Slide`, `Fragment`, and `Block`.
///
/// # Examples
///
/// ```rust
/// use pitaya::{Deck, ToMarkdown};
///
/// let deck = Deck::parse("# Title\n\n---\n\nBody text\n")?;
///
/// // Serialize the entire deck
/// let text = deck.to_markdown()?;
/// assert_eq!(text, "# Title\n\n---\n\nBody text\n");
///
/// // Or serialize individual parts
/// for slide in deck.slides() {
///     let slide_text = slide.to_markdown()?;
///     println!("{}", slide_text);
/// }
/// # Ok::<(), pitaya::Error>(())
/// ```
pub trait ToMarkdown {
    /// Serialize this item with default options.
    fn to_markdown(&self) -> Result<String> {
        self.to_markdown_with_options(&MarkdownOptions::default())
    }

    /// Serialize this item with custom options.
    ///
    /// # Arguments
    ///
    /// * `options` - Configuration for the serialization
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String>;
}
