//! Line scanner over raw deck text.

use memchr::memchr;

/// A single input line with its 1-based number.
///
/// The content excludes the line terminator; a trailing `\r` is stripped so
/// CRLF input scans the same as LF input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub content: &'a str,
}

/// Iterator over input lines.
///
/// A trailing newline does not produce a final empty line, so text in
/// canonical form scans to the same lines it was rendered from.
pub(crate) struct Lines<'a> {
    text: &'a str,
    pos: usize,
    next_number: usize,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0, next_number: 1 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.pos..];
        let (content, advance) = match memchr(b'\n', rest.as_bytes()) {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        let content = content.strip_suffix('\r').unwrap_or(content);
        let number = self.next_number;
        self.next_number += 1;
        self.pos += advance;
        Some(Line { number, content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<(usize, &str)> {
        Lines::new(text).map(|line| (line.number, line.content)).collect()
    }

    #[test]
    fn numbers_lines_from_one() {
        assert_eq!(collect("a\nb\nc"), vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn trailing_newline_yields_no_empty_line() {
        assert_eq!(collect("a\n"), vec![(1, "a")]);
        assert_eq!(collect("a\n\n"), vec![(1, "a"), (2, "")]);
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(collect("a\r\nb\r\n"), vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(collect("").is_empty());
    }
}
