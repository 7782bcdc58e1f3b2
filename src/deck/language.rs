//! Code-fence language tag normalization.
//!
//! Deck authors abbreviate fence tags freely (`js`, `py`, `yml`). This
//! module provides a zero-cost compile-time lookup table resolving the
//! common aliases to the canonical names downstream highlighters expect.
//! Uses `phf` for efficient perfect hash function lookups.
use phf::phf_map;

/// Compile-time lookup table for fence-tag aliases.
///
/// Maps abbreviated language tags to their canonical equivalents.
/// Uses perfect hash function for O(1) lookup with zero runtime cost.
static LANGUAGE_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "js" => "javascript",
    "jsx" => "javascript",
    "mjs" => "javascript",
    "ts" => "typescript",
    "tsx" => "typescript",
    "py" => "python",
    "rb" => "ruby",
    "rs" => "rust",
    "sh" => "shell",
    "bash" => "shell",
    "zsh" => "shell",
    "yml" => "yaml",
    "md" => "markdown",
    "kt" => "kotlin",
    "cs" => "csharp",
    "c++" => "cpp",
    "htm" => "html",
    "golang" => "go",
    "pl" => "perl",
    "ps1" => "powershell",
    "dockerfile" => "docker",
    "objc" => "objectivec",
};

/// Resolve a fence language tag to its canonical name.
///
/// Unknown tags fall through unchanged, since the set of valid languages
/// is open-ended.
///
/// # Examples
///
/// ```rust
/// use pitaya::canonical_language;
///
/// assert_eq!(canonical_language("js"), "javascript");
/// assert_eq!(canonical_language("elixir"), "elixir");
/// ```
#[inline]
pub fn canonical_language(tag: &str) -> &str {
    LANGUAGE_ALIASES.get(tag).copied().unwrap_or(tag)
}
