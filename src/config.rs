//! Normalizer configuration.
//!
//! # Example
//!
//! ```
//! use zotero_record::NormalizerConfig;
//!
//! let config = NormalizerConfig::new()
//!     .with_excerpt_length(80)
//!     .with_fallback_title("Untitled");
//! assert_eq!(config.excerpt_length, 80);
//! ```

/// Default number of characters kept in a note excerpt.
pub const DEFAULT_EXCERPT_LENGTH: usize = 50;
/// Default suffix appended to note excerpts.
pub const DEFAULT_EXCERPT_SUFFIX: &str = "...";
/// Default title for records with no title, short title or note.
pub const DEFAULT_FALLBACK_TITLE: &str = "[No Title]";
/// Default creator type treated as an author.
pub const DEFAULT_AUTHOR_ROLE: &str = "author";

/// Settings that control how a record is normalized.
///
/// The defaults reproduce the reference manager plugin's output exactly,
/// including the excerpt suffix being appended to notes that were not truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Maximum number of characters taken from the note text
    pub excerpt_length: usize,
    /// Appended after the excerpt text
    pub excerpt_suffix: String,
    /// Append the suffix even when the note text fits within `excerpt_length`
    pub always_append_suffix: bool,
    /// Title used when nothing better is available
    pub fallback_title: String,
    /// Exact, case-sensitive creator type selected by `authors()`
    pub author_role: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            excerpt_suffix: DEFAULT_EXCERPT_SUFFIX.to_string(),
            always_append_suffix: true,
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            author_role: DEFAULT_AUTHOR_ROLE.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Creates a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of characters kept from the note text.
    #[must_use]
    pub fn with_excerpt_length(mut self, length: usize) -> Self {
        self.excerpt_length = length;
        self
    }

    /// Sets the text appended after an excerpt.
    #[must_use]
    pub fn with_excerpt_suffix(mut self, suffix: &str) -> Self {
        self.excerpt_suffix = suffix.to_string();
        self
    }

    /// Sets whether the suffix is appended to notes that were not truncated.
    #[must_use]
    pub fn with_always_append_suffix(mut self, always: bool) -> Self {
        self.always_append_suffix = always;
        self
    }

    /// Sets the title used when the record has no title, short title or note.
    #[must_use]
    pub fn with_fallback_title(mut self, title: &str) -> Self {
        self.fallback_title = title.to_string();
        self
    }

    /// Sets the creator type selected as authors.
    #[must_use]
    pub fn with_author_role(mut self, role: &str) -> Self {
        self.author_role = role.to_string();
        self
    }
}
