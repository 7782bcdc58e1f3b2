//! Line-oriented deck parser.
//!
//! A single pass over the input classifies each line by its syntactic cue.
//! Separator lines split slides and fragments, fences collect verbatim code,
//! and everything unrecognized degrades to paragraph text — presentation
//! content is free-form prose, so nothing is rejected. The one hard failure
//! is a fence left open at end of input.

// Submodule declarations
mod scanner;

use crate::common::{Error, Result};
use crate::deck::{
    Block, Code, Deck, Fragment, Heading, Image, List, ListItem, Paragraph, Slide, Table, TableRow,
};
use scanner::{Line, Lines};

/// A line consisting solely of this token begins a new slide.
pub(crate) const SLIDE_SEPARATOR: &str = "---";
/// A line consisting solely of this token begins a new fragment.
pub(crate) const FRAGMENT_SEPARATOR: &str = "+++";
/// Fence delimiter for code blocks.
pub(crate) const FENCE: &str = "```";

/// Parse deck text into the model.
pub(crate) fn parse_deck(text: &str) -> Result<Deck> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut builder = DeckBuilder::new();
    for line in Lines::new(text) {
        builder.push_line(line);
    }
    builder.finish()
}

/// Partially accumulated block, pending until a boundary closes it.
enum Pending {
    None,
    Paragraph { lines: Vec<String> },
    List { items: Vec<ListItem> },
    Table { rows: Vec<TableRow> },
    Code { language: Option<String>, lines: Vec<String>, opened_at: usize },
}

/// Accumulates slides, fragments, and blocks during the scan.
struct DeckBuilder {
    slides: Vec<Slide>,
    fragments: Vec<Fragment>,
    blocks: Vec<Block>,
    pending: Pending,
}

impl DeckBuilder {
    fn new() -> Self {
        Self {
            slides: Vec::new(),
            fragments: Vec::new(),
            blocks: Vec::new(),
            pending: Pending::None,
        }
    }

    fn push_line(&mut self, line: Line<'_>) {
        // An open fence swallows everything up to the closing fence,
        // separator lines included.
        if let Pending::Code { lines, .. } = &mut self.pending {
            if line.content == FENCE {
                self.flush_block();
            } else {
                lines.push(line.content.to_string());
            }
            return;
        }

        match line.content {
            SLIDE_SEPARATOR => {
                self.flush_block();
                self.flush_fragment();
                self.flush_slide();
            }
            FRAGMENT_SEPARATOR => {
                self.flush_block();
                self.flush_fragment();
            }
            _ => self.push_content(line),
        }
    }

    fn push_content(&mut self, line: Line<'_>) {
        let content = line.content;

        if content.trim().is_empty() {
            self.flush_block();
            return;
        }

        if let Some(rest) = content.strip_prefix(FENCE) {
            self.flush_block();
            let language = if rest.is_empty() { None } else { Some(rest.to_string()) };
            self.pending = Pending::Code {
                language,
                lines: Vec::new(),
                opened_at: line.number,
            };
            return;
        }

        if let Some((level, text)) = heading_line(content) {
            self.flush_block();
            self.blocks.push(Block::Heading(Heading { level, text: text.to_string() }));
            return;
        }

        if let Some((alt, url)) = image_line(content) {
            self.flush_block();
            self.blocks.push(Block::Image(Image {
                alt: alt.to_string(),
                url: url.to_string(),
            }));
            return;
        }

        if let Some(cells) = table_row(content) {
            match &mut self.pending {
                Pending::Table { rows } => rows.push(TableRow { cells }),
                _ => {
                    self.flush_block();
                    self.pending = Pending::Table { rows: vec![TableRow { cells }] };
                }
            }
            return;
        }

        if let Some(item) = list_item(content) {
            match &mut self.pending {
                Pending::List { items } => items.push(item),
                _ => {
                    self.flush_block();
                    self.pending = Pending::List { items: vec![item] };
                }
            }
            return;
        }

        match &mut self.pending {
            Pending::Paragraph { lines } => lines.push(content.to_string()),
            _ => {
                self.flush_block();
                self.pending = Pending::Paragraph { lines: vec![content.to_string()] };
            }
        }
    }

    fn flush_block(&mut self) {
        match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::None => {}
            Pending::Paragraph { lines } => {
                self.blocks.push(Block::Paragraph(Paragraph { text: lines.join("\n") }));
            }
            Pending::List { items } => {
                self.blocks.push(Block::List(List { items }));
            }
            Pending::Table { rows } => {
                self.blocks.push(Block::Table(Table { rows }));
            }
            Pending::Code { language, lines, .. } => {
                self.blocks.push(Block::Code(Code { language, source: lines.join("\n") }));
            }
        }
    }

    fn flush_fragment(&mut self) {
        let blocks = std::mem::take(&mut self.blocks);
        self.fragments.push(Fragment::new(blocks));
    }

    fn flush_slide(&mut self) {
        let fragments = std::mem::take(&mut self.fragments);
        self.slides.push(Slide::new(fragments));
    }

    fn finish(mut self) -> Result<Deck> {
        if let Pending::Code { opened_at, .. } = &self.pending {
            return Err(Error::UnterminatedFence { line: *opened_at });
        }
        self.flush_block();
        self.flush_fragment();
        self.flush_slide();
        Ok(Deck::from_slides(self.slides))
    }
}

/// A `#`-run of depth 1-6 followed by a space.
///
/// Deeper runs and missing spaces are not headings and fall through to
/// paragraph text.
fn heading_line(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text))
}

/// A line that is exactly one `![alt](url)` reference.
fn image_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("![")?;
    let close = rest.find("](")?;
    let alt = &rest[..close];
    let url = rest[close + 2..].strip_suffix(')')?;
    Some((alt, url))
}

/// A pipe-delimited row: starts and ends with `|`.
fn table_row(line: &str) -> Option<Vec<String>> {
    if line.len() < 2 || !line.starts_with('|') || !line.ends_with('|') {
        return None;
    }
    Some(split_cells(&line[1..line.len() - 1]))
}

/// Split a row interior on unescaped pipes, keeping cell text verbatim.
fn split_cells(interior: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for ch in interior.chars() {
        match ch {
            '\\' if !escaped => {
                current.push(ch);
                escaped = true;
            }
            '|' if !escaped => {
                cells.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(ch);
                escaped = false;
            }
        }
    }
    cells.push(current);
    cells
}

/// An unordered (`-`, `*`, `•`) or ordered (`1.`, `1)`, `(1)`) list line.
fn list_item(line: &str) -> Option<ListItem> {
    let trimmed = line.trim_start_matches(' ');
    let indent = line.len() - trimmed.len();
    let (marker, text) = list_marker(trimmed)?;
    Some(ListItem {
        indent,
        marker: marker.to_string(),
        text: text.to_string(),
    })
}

fn list_marker(text: &str) -> Option<(&str, &str)> {
    for marker in ["-", "*", "•"] {
        if let Some(rest) = text.strip_prefix(marker)
            && let Some(content) = rest.strip_prefix(' ')
        {
            return Some((marker, content));
        }
    }
    ordered_marker(text)
}

fn ordered_marker(text: &str) -> Option<(&str, &str)> {
    // Parenthesized numbers: (1) (2) (3)
    if let Some(inner) = text.strip_prefix('(')
        && let Some(end) = inner.find(") ")
        && end > 0
        && inner[..end].bytes().all(|b| b.is_ascii_digit())
    {
        return Some((&text[..end + 2], &inner[end + 2..]));
    }

    // Trailing-dot and trailing-paren numbers: 1. 2. or 1) 2)
    let digits = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0
        && let Some(&delimiter) = text.as_bytes().get(digits)
        && (delimiter == b'.' || delimiter == b')')
        && text.as_bytes().get(digits + 1) == Some(&b' ')
    {
        return Some((&text[..digits + 1], &text[digits + 2..]));
    }

    None
}
