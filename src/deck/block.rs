//! Block types for representing ordered slide content.

use serde::{Deserialize, Serialize};

use super::language::canonical_language;

/// A typed unit of slide content.
///
/// This enum represents the natural order of content as it appears in a
/// fragment, which is essential for loss-free serialization and other
/// sequential operations.
///
/// # Examples
///
/// ```rust
/// use pitaya::{Block, Deck};
///
/// let deck = Deck::parse("# Title\n\nSome prose")?;
///
/// // Process blocks in document order
/// for block in deck.blocks() {
///     match block {
///         Block::Heading(heading) => println!("Heading: {}", heading.text),
///         Block::Paragraph(para) => println!("Paragraph: {}", para.text),
///         _ => {}
///     }
/// }
/// # Ok::<(), pitaya::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A heading line (`#` through `######`)
    Heading(Heading),
    /// One or more adjacent plain text lines
    Paragraph(Paragraph),
    /// Adjacent list-marker lines
    List(List),
    /// A fenced code span with an optional language tag
    Code(Code),
    /// A whole-line image reference
    Image(Image),
    /// Adjacent pipe-delimited rows
    Table(Table),
}

impl Block {
    /// Check if this block is a heading.
    #[inline]
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a paragraph.
    #[inline]
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Block::List(_))
    }

    /// Check if this block is a fenced code span.
    #[inline]
    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code(_))
    }

    /// Check if this block is an image reference.
    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image(_))
    }

    /// Check if this block is a table.
    #[inline]
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get a reference to the heading, if this is a heading block.
    #[inline]
    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Block::Heading(h) => Some(h),
            _ => None,
        }
    }

    /// Get a reference to the paragraph, if this is a paragraph block.
    #[inline]
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get a reference to the list, if this is a list block.
    #[inline]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Block::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to the code span, if this is a code block.
    #[inline]
    pub fn as_code(&self) -> Option<&Code> {
        match self {
            Block::Code(c) => Some(c),
            _ => None,
        }
    }

    /// Get a reference to the image, if this is an image block.
    #[inline]
    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Block::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Get a reference to the table, if this is a table block.
    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Get the plain text content of the block.
    ///
    /// Headings and paragraphs yield their text, lists the text of each item,
    /// code blocks their source, images their alternative text, and tables
    /// their trimmed cell contents.
    pub fn text(&self) -> String {
        match self {
            Block::Heading(h) => h.text.clone(),
            Block::Paragraph(p) => p.text.clone(),
            Block::List(l) => l
                .items
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Code(c) => c.source.clone(),
            Block::Image(i) => i.alt.clone(),
            Block::Table(t) => t
                .rows
                .iter()
                .map(|row| row.cell_texts().join(" "))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading depth, 1 through 6
    pub level: u8,
    /// Text following the `#` run, verbatim
    pub text: String,
}

/// One or more adjacent plain text lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// The lines joined with `\n`, verbatim
    pub text: String,
}

/// Adjacent list-marker lines forming one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// The items in source order
    pub items: Vec<ListItem>,
}

impl List {
    /// The kind of the list, taken from its first item.
    pub fn kind(&self) -> ListKind {
        self.items.first().map(ListItem::kind).unwrap_or(ListKind::Unordered)
    }

    /// Number of items in the list.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A single entry of a list block.
///
/// The indent, marker, and text are kept verbatim so that serialization
/// reproduces the source line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Number of leading spaces before the marker
    pub indent: usize,
    /// The marker text (e.g., `-`, `*`, `1.`, `(2)`)
    pub marker: String,
    /// The content after the marker and its separating space
    pub text: String,
}

impl ListItem {
    /// The kind of this item, derived from its marker.
    pub fn kind(&self) -> ListKind {
        match self.marker.as_str() {
            "-" | "*" | "•" => ListKind::Unordered,
            _ => ListKind::Ordered,
        }
    }
}

/// Kinds of lists supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListKind {
    /// Ordered list (numbered)
    Ordered,
    /// Unordered list (bulleted)
    Unordered,
}

/// A fenced code span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    /// Language tag following the opening fence, if any, verbatim
    pub language: Option<String>,
    /// The fenced lines joined with `\n`, verbatim
    pub source: String,
}

impl Code {
    /// The language tag with common aliases resolved to canonical names.
    ///
    /// Returns the verbatim tag unchanged when no alias is known, and `None`
    /// when the fence carried no tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pitaya::Deck;
    ///
    /// let deck = Deck::parse("```js\nconst x = 1;\n```")?;
    /// let code = deck.blocks().next().unwrap().as_code().unwrap();
    /// assert_eq!(code.language.as_deref(), Some("js"));
    /// assert_eq!(code.canonical_language(), Some("javascript"));
    /// # Ok::<(), pitaya::Error>(())
    /// ```
    pub fn canonical_language(&self) -> Option<&str> {
        self.language.as_deref().map(canonical_language)
    }
}

/// A whole-line `![alt](url)` image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Alternative text between `![` and `]`
    pub alt: String,
    /// Target between `(` and the closing `)`
    pub url: String,
}

/// Adjacent pipe-delimited rows forming one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// The rows in source order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Number of rows in the table.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One row of a table block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell spans between the pipes, verbatim (padding included)
    pub cells: Vec<String>,
}

impl TableRow {
    /// Number of cells in the row.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell contents with surrounding whitespace trimmed.
    pub fn cell_texts(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.trim()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let block = Block::Heading(Heading { level: 2, text: "Overview".into() });
        assert!(block.is_heading());
        assert!(!block.is_code());
        assert_eq!(block.as_heading().unwrap().level, 2);
        assert!(block.as_table().is_none());
    }

    #[test]
    fn list_kind_follows_first_item() {
        let list = List {
            items: vec![
                ListItem { indent: 0, marker: "1.".into(), text: "first".into() },
                ListItem { indent: 0, marker: "-".into(), text: "stray".into() },
            ],
        };
        assert_eq!(list.kind(), ListKind::Ordered);
        assert_eq!(list.items[1].kind(), ListKind::Unordered);
    }

    #[test]
    fn table_row_trims_cell_texts() {
        let row = TableRow { cells: vec![" React ".into(), " D3 ".into()] };
        assert_eq!(row.cell_texts(), vec!["React", "D3"]);
        assert_eq!(row.cell_count(), 2);
    }

    #[test]
    fn block_text_extracts_payloads() {
        let code = Block::Code(Code { language: Some("javascript".into()), source: "const x = 1;".into() });
        assert_eq!(code.text(), "const x = 1;");

        let table = Block::Table(Table {
            rows: vec![TableRow { cells: vec![" a ".into(), " b ".into()] }],
        });
        assert_eq!(table.text(), "a b");
    }
}
