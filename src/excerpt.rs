//! Plain-text excerpts of rich-text notes.
//!
//! The conversion from markup to text is delegated to a [`TextExtractor`], so the
//! normalizer does not depend on any particular HTML implementation. The default
//! [`HtmlTextExtractor`] parses the note as an HTML fragment and keeps only text
//! that would be rendered.
//!
//! # Example
//!
//! ```
//! use zotero_record::{HtmlTextExtractor, TextExtractor};
//!
//! let text = HtmlTextExtractor.extract_text("<p>Hello <b>world</b></p><script>x()</script>");
//! assert_eq!(text, "Hello world");
//! ```

use crate::config::NormalizerConfig;
use scraper::{Html, Node};

/// Elements whose text content is never rendered.
const INERT_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Converts untrusted rich text into plain text.
///
/// Implementations are responsible for neutralizing active content; the
/// normalizer only ever reads the returned text. Any `Fn(&str) -> String` closure
/// is an extractor.
pub trait TextExtractor {
    /// Returns the rendered text content of `markup`.
    fn extract_text(&self, markup: &str) -> String;
}

impl<F> TextExtractor for F
where
    F: Fn(&str) -> String,
{
    fn extract_text(&self, markup: &str) -> String {
        self(markup)
    }
}

/// [`TextExtractor`] backed by an HTML5 fragment parser.
///
/// Entities are decoded, tags are dropped and the text of `script`, `style` and
/// `template` elements is skipped. Text nodes are concatenated without separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextExtractor;

impl TextExtractor for HtmlTextExtractor {
    fn extract_text(&self, markup: &str) -> String {
        let fragment = Html::parse_fragment(markup);
        fragment
            .root_element()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) if !node.ancestors().any(|ancestor| is_inert(ancestor.value())) => {
                    Some(&**text)
                }
                _ => None,
            })
            .collect()
    }
}

fn is_inert(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|element| INERT_ELEMENTS.contains(&element.name()))
}

/// Builds the excerpt for a non-empty note.
///
/// The extracted text is trimmed and cut to `excerpt_length` characters. The
/// suffix is appended unconditionally unless `always_append_suffix` is off, in
/// which case only truncated text gets it.
pub(crate) fn note_excerpt<E>(note: &str, extractor: &E, config: &NormalizerConfig) -> String
where
    E: TextExtractor + ?Sized,
{
    let text = extractor.extract_text(note);
    let text = text.trim();

    let mut excerpt: String = text.chars().take(config.excerpt_length).collect();
    let truncated = excerpt.len() < text.len();
    if truncated || config.always_append_suffix {
        excerpt.push_str(&config.excerpt_suffix);
    }
    excerpt
}
