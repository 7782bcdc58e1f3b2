//! Configuration types for deck serialization.

/// Configuration options for deck serialization.
///
/// This struct controls how a deck is written back to text. The defaults
/// produce the canonical form: blocks separated by one blank line,
/// separators padded by one blank line on each side, and a single trailing
/// newline.
///
/// # Examples
///
/// ```rust
/// use pitaya::MarkdownOptions;
///
/// // Create with defaults
/// let options = MarkdownOptions::default();
///
/// // Or customize
/// let options = MarkdownOptions::new()
///     .with_parallel(false)
///     .with_trailing_newline(false);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MarkdownOptions {
    /// Whether large decks may be rendered slide-by-slide in parallel
    pub use_parallel: bool,
    /// Whether non-empty output ends with a trailing newline
    pub trailing_newline: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            use_parallel: true,
            trailing_newline: true,
        }
    }
}

impl MarkdownOptions {
    /// Create a new `MarkdownOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether large decks may be rendered in parallel.
    ///
    /// Parallel and sequential rendering produce identical output; this
    /// only controls whether worker threads may be used for large decks.
    #[inline]
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Set whether non-empty output ends with a trailing newline.
    #[inline]
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_options_builder() {
        let options = MarkdownOptions::new()
            .with_parallel(false)
            .with_trailing_newline(false);

        assert!(!options.use_parallel);
        assert!(!options.trailing_newline);
    }

    #[test]
    fn test_markdown_options_default() {
        let options = MarkdownOptions::default();
        assert!(options.use_parallel);
        assert!(options.trailing_newline);
    }
}
