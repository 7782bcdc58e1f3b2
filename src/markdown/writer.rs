//! Low-level writer for deck text generation.
//!
//! This module provides the `MarkdownWriter` struct which handles the
//! actual emission of blocks and separators into an output buffer.
use super::config::MarkdownOptions;
use crate::common::{Error, Result};
use crate::deck::Block;
use crate::parser::FENCE;
use std::fmt::Write as FmtWrite;

/// Low-level writer for efficient deck text generation.
///
/// Blocks are separated by exactly one blank line and separators are padded
/// by one blank line on each side; padding collapses next to empty slides
/// and fragments so canonical input reproduces byte-for-byte.
pub(crate) struct MarkdownWriter {
    /// The output buffer
    buffer: String,
    /// Current options
    options: MarkdownOptions,
}

impl MarkdownWriter {
    /// Create a new writer with the given options.
    pub fn new(options: MarkdownOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096),
            options,
        }
    }

    /// Write a block to the buffer, padding it from earlier content.
    pub fn write_block(&mut self, block: &Block) -> Result<()> {
        self.pad();
        match block {
            Block::Heading(heading) => {
                for _ in 0..heading.level {
                    self.buffer.push('#');
                }
                self.buffer.push(' ');
                self.buffer.push_str(&heading.text);
            }
            Block::Paragraph(para) => {
                self.buffer.push_str(&para.text);
            }
            Block::List(list) => {
                for (i, item) in list.items.iter().enumerate() {
                    if i > 0 {
                        self.buffer.push('\n');
                    }
                    for _ in 0..item.indent {
                        self.buffer.push(' ');
                    }
                    self.buffer.push_str(&item.marker);
                    self.buffer.push(' ');
                    self.buffer.push_str(&item.text);
                }
            }
            Block::Code(code) => {
                self.buffer.reserve(code.source.len() + 8);
                self.buffer.push_str(FENCE);
                if let Some(language) = &code.language {
                    self.buffer.push_str(language);
                }
                self.buffer.push('\n');
                if !code.source.is_empty() {
                    self.buffer.push_str(&code.source);
                    self.buffer.push('\n');
                }
                self.buffer.push_str(FENCE);
            }
            Block::Image(image) => {
                write!(self.buffer, "![{}]({})", image.alt, image.url)
                    .map_err(|e| Error::Other(e.to_string()))?;
            }
            Block::Table(table) => {
                for (i, row) in table.rows.iter().enumerate() {
                    if i > 0 {
                        self.buffer.push('\n');
                    }
                    self.buffer.push('|');
                    for cell in &row.cells {
                        self.buffer.push_str(cell);
                        self.buffer.push('|');
                    }
                }
            }
        }
        Ok(())
    }

    /// Write a slide or fragment separator on its own line.
    pub fn write_separator(&mut self, separator: &str) {
        while self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        if !self.buffer.is_empty() {
            self.buffer.push_str("\n\n");
        }
        self.buffer.push_str(separator);
        self.buffer.push_str("\n\n");
    }

    /// Ensure exactly one blank line between earlier content and what
    /// follows.
    fn pad(&mut self) {
        if self.buffer.is_empty() || self.buffer.ends_with("\n\n") {
            return;
        }
        while self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer.push_str("\n\n");
    }

    /// Append text to the buffer.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Reserve additional capacity in the buffer.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    /// Get the buffer as a bare chunk, without trailing-newline handling.
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get the final output, normalizing the document tail.
    pub fn finish_document(mut self) -> String {
        if self.buffer.is_empty() {
            return self.buffer;
        }
        while self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        if self.options.trailing_newline {
            self.buffer.push('\n');
        }
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Heading, Paragraph};

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(Paragraph { text: text.into() })
    }

    #[test]
    fn blocks_are_separated_by_one_blank_line() {
        let mut writer = MarkdownWriter::new(MarkdownOptions::default());
        writer.write_block(&paragraph("a")).unwrap();
        writer.write_block(&paragraph("b")).unwrap();
        assert_eq!(writer.finish(), "a\n\nb");
    }

    #[test]
    fn separator_is_padded_between_content() {
        let mut writer = MarkdownWriter::new(MarkdownOptions::default());
        writer.write_block(&paragraph("a")).unwrap();
        writer.write_separator("---");
        writer.write_block(&paragraph("b")).unwrap();
        assert_eq!(writer.finish(), "a\n\n---\n\nb");
    }

    #[test]
    fn separator_padding_collapses_next_to_empty_segments() {
        let mut writer = MarkdownWriter::new(MarkdownOptions::default());
        writer.write_separator("---");
        writer.write_separator("---");
        writer.write_block(&paragraph("b")).unwrap();
        assert_eq!(writer.finish(), "---\n\n---\n\nb");
    }

    #[test]
    fn document_tail_gets_a_single_newline() {
        let mut writer = MarkdownWriter::new(MarkdownOptions::default());
        writer.write_block(&Block::Heading(Heading { level: 1, text: "T".into() }))
            .unwrap();
        assert_eq!(writer.finish_document(), "# T\n");

        let empty = MarkdownWriter::new(MarkdownOptions::default());
        assert_eq!(empty.finish_document(), "");
    }

    #[test]
    fn trailing_newline_can_be_disabled() {
        let options = MarkdownOptions::new().with_trailing_newline(false);
        let mut writer = MarkdownWriter::new(options);
        writer.write_block(&paragraph("a")).unwrap();
        assert_eq!(writer.finish_document(), "a");
    }
}
