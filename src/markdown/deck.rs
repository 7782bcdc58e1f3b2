//! ToMarkdown implementations for the deck model.
//!
//! Serialization is the inverse of parsing: canonical text reproduces
//! byte-for-byte, and any parsed deck re-parses to the same model.

use super::config::MarkdownOptions;
use super::traits::ToMarkdown;
use super::writer::MarkdownWriter;
use crate::common::Result;
use crate::deck::{Block, Deck, Fragment, Slide};
use crate::parser::{FRAGMENT_SEPARATOR, SLIDE_SEPARATOR};
use rayon::prelude::*;

/// Minimum number of slides to justify parallel rendering overhead.
const PARALLEL_THRESHOLD: usize = 10;

impl ToMarkdown for Deck {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        let slides = self.slides();

        // Slides render independently, so large decks can fan out across
        // worker threads; the indexed join below keeps output order stable.
        let slide_strings: Vec<String> =
            if options.use_parallel && slides.len() >= PARALLEL_THRESHOLD {
                slides
                    .par_iter()
                    .map(|slide| slide_markdown(slide, options))
                    .collect::<Result<Vec<String>>>()?
            } else {
                slides
                    .iter()
                    .map(|slide| slide_markdown(slide, options))
                    .collect::<Result<Vec<String>>>()?
            };

        let total_size: usize = slide_strings.iter().map(|s| s.len()).sum();
        let separator_size = slide_strings.len().saturating_sub(1) * 7; // "\n\n---\n\n"

        let mut writer = MarkdownWriter::new(*options);
        writer.reserve(total_size + separator_size);
        for (i, slide_string) in slide_strings.iter().enumerate() {
            if i > 0 {
                writer.write_separator(SLIDE_SEPARATOR);
            }
            writer.push_str(slide_string);
        }
        Ok(writer.finish_document())
    }
}

impl ToMarkdown for Slide {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        slide_markdown(self, options)
    }
}

impl ToMarkdown for Fragment {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        fragment_markdown(self, options)
    }
}

impl ToMarkdown for Block {
    fn to_markdown_with_options(&self, options: &MarkdownOptions) -> Result<String> {
        let mut writer = MarkdownWriter::new(*options);
        writer.write_block(self)?;
        Ok(writer.finish())
    }
}

/// Render one slide as a bare chunk, without the document tail.
fn slide_markdown(slide: &Slide, options: &MarkdownOptions) -> Result<String> {
    let mut writer = MarkdownWriter::new(*options);
    for (i, fragment) in slide.fragments().iter().enumerate() {
        if i > 0 {
            writer.write_separator(FRAGMENT_SEPARATOR);
        }
        writer.push_str(&fragment_markdown(fragment, options)?);
    }
    Ok(writer.finish())
}

/// Render one fragment as a bare chunk.
fn fragment_markdown(fragment: &Fragment, options: &MarkdownOptions) -> Result<String> {
    let mut writer = MarkdownWriter::new(*options);
    for block in fragment.blocks() {
        writer.write_block(block)?;
    }
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roundtrip(text: &str) -> String {
        Deck::parse(text).unwrap().to_markdown().unwrap()
    }

    #[test]
    fn canonical_text_reproduces_byte_for_byte() {
        let cases = [
            "# Title\n\n---\n\nBody text\n",
            "Intro\n\n+++\n\nReveal\n\n---\n\nEnd\n",
            "```javascript\nconst x = 1;\n```\n",
            "- one\n- two\n  - nested\n\n1. first\n2. second\n",
            "| a | b |\n|---|---|\n| c | d |\n",
            "![chart](bench.png)\n",
            "a\n\n---\n\n---\n\nb\n",
            "---\n\nonly second\n",
            "# Deep\n\nprose line one\nprose line two\n\n```\nraw\n```\n",
        ];
        for case in cases {
            assert_eq!(roundtrip(case), case, "case: {case:?}");
        }
    }

    #[test]
    fn non_canonical_spacing_normalizes_but_keeps_structure() {
        let deck = Deck::parse("# Title\n---\nBody text").unwrap();
        let rendered = deck.to_markdown().unwrap();
        assert_eq!(rendered, "# Title\n\n---\n\nBody text\n");
        assert_eq!(Deck::parse(&rendered).unwrap(), deck);
    }

    #[test]
    fn empty_deck_renders_to_nothing() {
        assert_eq!(roundtrip(""), "");
    }

    #[test]
    fn lone_separator_keeps_both_slides() {
        let rendered = roundtrip("---");
        assert_eq!(rendered, "---\n");
        assert_eq!(Deck::parse(&rendered).unwrap().slide_count(), 2);
    }

    #[test]
    fn block_markdown_is_bare() {
        let deck = Deck::parse("## Heading").unwrap();
        let block = deck.blocks().next().unwrap();
        assert_eq!(block.to_markdown().unwrap(), "## Heading");
    }

    #[test]
    fn parallel_and_sequential_output_are_identical() {
        let mut text = String::new();
        for i in 0..24 {
            if i > 0 {
                text.push_str("\n\n---\n\n");
            }
            text.push_str(&format!("# Slide {i}\n\npoint {i}\n\n+++\n\n- item {i}"));
        }
        text.push('\n');
        let deck = Deck::parse(&text).unwrap();

        let parallel = deck
            .to_markdown_with_options(&MarkdownOptions::new().with_parallel(true))
            .unwrap();
        let sequential = deck
            .to_markdown_with_options(&MarkdownOptions::new().with_parallel(false))
            .unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel, text);
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Plain prose, blank lines included
            "[a-z ]{0,12}",
            Just("---".to_string()),
            Just("+++".to_string()),
            "[a-z]{1,8}".prop_map(|word| format!("# {word}")),
            "[a-z]{1,8}".prop_map(|word| format!("- {word}")),
            "[a-z]{1,8}".prop_map(|word| format!("3. {word}")),
            ("[a-z]{1,4}", "[a-z]{1,4}").prop_map(|(a, b)| format!("| {a} | {b} |")),
            "[a-z]{1,8}".prop_map(|word| format!("![{word}](img/{word}.png)")),
            // Balanced fences only, so every generated input parses
            ("[a-z]{0,6}", "[a-z =;]{1,12}")
                .prop_map(|(tag, body)| format!("```{tag}\n{body}\n```")),
        ]
    }

    fn deck_text_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(line_strategy(), 0..32).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        /// Rendering is the inverse of parsing: the model survives a
        /// render/parse cycle, and rendered text is a fixed point.
        #[test]
        fn render_parse_cycle_is_stable(text in deck_text_strategy()) {
            let deck = Deck::parse(&text).unwrap();
            let rendered = deck.to_markdown().unwrap();
            let reparsed = Deck::parse(&rendered).unwrap();
            prop_assert_eq!(&reparsed, &deck);
            let rerendered = reparsed.to_markdown().unwrap();
            prop_assert_eq!(rerendered, rendered);
        }

        /// Slide count equals separator lines (outside fences) plus one.
        #[test]
        fn slide_count_matches_separator_lines(text in deck_text_strategy()) {
            let deck = Deck::parse(&text).unwrap();
            let mut in_fence = false;
            let mut separators = 0;
            for line in text.lines() {
                if in_fence {
                    if line == "```" {
                        in_fence = false;
                    }
                } else if line.starts_with("```") {
                    in_fence = true;
                } else if line == "---" {
                    separators += 1;
                }
            }
            prop_assert_eq!(deck.slide_count(), separators + 1);
        }
    }
}
