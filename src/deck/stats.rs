//! Summary statistics over a parsed deck.

use serde::{Deserialize, Serialize};

use super::{Block, Deck};

/// Summary counters for a deck.
///
/// Derived on demand from the model; cheap enough to recompute and therefore
/// not cached.
///
/// # Examples
///
/// ```rust
/// use pitaya::Deck;
///
/// let deck = Deck::parse("# Title\n---\n```js\nconst x = 1;\n```")?;
/// let stats = deck.stats();
/// assert_eq!(stats.slide_count, 2);
/// assert_eq!(stats.languages, vec!["js".to_string()]);
/// # Ok::<(), pitaya::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Number of slides
    pub slide_count: usize,
    /// Number of fragments across all slides
    pub fragment_count: usize,
    /// Number of blocks across all fragments
    pub block_count: usize,
    /// Number of whitespace-separated words in the plain text
    pub word_count: usize,
    /// Number of characters in the plain text
    pub character_count: usize,
    /// Code-fence language tags in order of first appearance, verbatim
    pub languages: Vec<String>,
}

impl DeckStats {
    /// Check if the deck holds any content blocks at all.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.block_count > 0
    }

    pub(crate) fn collect(deck: &Deck) -> Self {
        let mut fragment_count = 0;
        let mut block_count = 0;
        let mut languages: Vec<String> = Vec::new();

        for slide in deck.slides() {
            fragment_count += slide.fragment_count();
            for block in slide.blocks() {
                block_count += 1;
                if let Block::Code(code) = block
                    && let Some(language) = &code.language
                    && !languages.iter().any(|known| known == language)
                {
                    languages.push(language.clone());
                }
            }
        }

        let text = deck.text();
        Self {
            slide_count: deck.slide_count(),
            fragment_count,
            block_count,
            word_count: text.split_whitespace().count(),
            character_count: text.chars().count(),
            languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_the_model() {
        let deck = Deck::parse("# One\n\ntwo words\n+++\n- three\n---\nlast").unwrap();
        let stats = deck.stats();
        assert_eq!(stats.slide_count, 2);
        assert_eq!(stats.fragment_count, 3);
        assert_eq!(stats.block_count, 4);
        assert_eq!(stats.word_count, 5);
        assert!(stats.has_content());
    }

    #[test]
    fn languages_keep_first_appearance_order() {
        let text = "```ts\nlet a;\n```\n\n```js\nlet b;\n```\n\n```ts\nlet c;\n```";
        let deck = Deck::parse(text).unwrap();
        assert_eq!(deck.stats().languages, vec!["ts".to_string(), "js".to_string()]);
    }

    #[test]
    fn empty_deck_has_no_content() {
        let stats = Deck::parse("").unwrap().stats();
        assert!(!stats.has_content());
        assert_eq!(stats.slide_count, 1);
        assert_eq!(stats.fragment_count, 1);
        assert_eq!(stats.word_count, 0);
    }
}
