//! Normalized views over a single raw record.
//!
//! [`RecordNormalizer`] owns one [`RawRecord`] and answers every query by
//! recomputing from it. Nothing is cached, so repeated calls always agree.
//!
//! # Title Precedence
//!
//! 1. `title`, if non-empty
//! 2. `shortTitle`, if non-empty
//! 3. an excerpt of the note's text
//! 4. the configured fallback (`"[No Title]"`)
//!
//! # Example
//!
//! ```
//! use zotero_record::{Creator, RawRecord, RecordNormalizer};
//!
//! let raw = RawRecord {
//!     key: "ABCD1234".to_string(),
//!     note: Some("<p>Reading notes on compilers</p>".to_string()),
//!     creators: vec![Creator::free_text("author", "Grace Brewster Hopper")],
//!     extra: Some("Citation Key: hopper1952".to_string()),
//!     ..Default::default()
//! };
//!
//! let record = RecordNormalizer::new(raw);
//! assert_eq!(record.title(), "Reading notes on compilers...");
//! assert_eq!(record.author().unwrap().last_name.as_deref(), Some("Hopper"));
//! assert_eq!(record.citation_key(), Some("hopper1952"));
//! ```

use crate::config::NormalizerConfig;
use crate::date::{NormalizedDate, parse_date};
use crate::excerpt::{HtmlTextExtractor, TextExtractor, note_excerpt};
use crate::name::NormalizedName;
use crate::record::{Creator, RawRecord};
use crate::utils::extract_citation_key;
use serde::Serialize;
use tracing::{debug, trace};

/// The full normalized projection of a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub key: String,
    pub title: String,
    pub short_title: Option<String>,
    /// `None` if the record's date could not be parsed
    pub date: Option<NormalizedDate>,
    pub authors: Vec<NormalizedName>,
    pub first_author: Option<NormalizedName>,
}

/// Wraps one [`RawRecord`] and exposes normalized, display-ready fields.
///
/// The note is reduced to text through `E`, which defaults to
/// [`HtmlTextExtractor`].
#[derive(Debug, Clone)]
pub struct RecordNormalizer<E = HtmlTextExtractor> {
    raw: RawRecord,
    extractor: E,
    config: NormalizerConfig,
}

impl RecordNormalizer {
    /// Creates a normalizer with the HTML text extractor and default settings.
    #[must_use]
    pub fn new(raw: RawRecord) -> Self {
        Self::with_extractor(raw, HtmlTextExtractor)
    }
}

impl<E: TextExtractor> RecordNormalizer<E> {
    /// Creates a normalizer that reduces notes to text with `extractor`.
    #[must_use]
    pub fn with_extractor(raw: RawRecord, extractor: E) -> Self {
        Self {
            raw,
            extractor,
            config: NormalizerConfig::default(),
        }
    }

    /// Replaces the normalization settings.
    #[must_use]
    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    /// The wrapped record.
    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    /// The settings in effect.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// The record identifier, unmodified.
    pub fn key(&self) -> &str {
        &self.raw.key
    }

    /// Resolves the display title. See the module documentation for precedence.
    pub fn title(&self) -> String {
        if let Some(title) = non_empty(self.raw.title.as_deref()) {
            return title.to_string();
        }
        if let Some(short_title) = non_empty(self.raw.short_title.as_deref()) {
            return short_title.to_string();
        }

        let excerpt = self.note_excerpt();
        if !excerpt.is_empty() {
            trace!(key = %self.raw.key, "using note excerpt as title");
            return excerpt;
        }

        trace!(key = %self.raw.key, "record has no title, short title or note");
        self.config.fallback_title.clone()
    }

    /// The raw short title, unmodified.
    pub fn short_title(&self) -> Option<&str> {
        self.raw.short_title.as_deref()
    }

    /// All creators in their original order.
    pub fn creators(&self) -> &[Creator] {
        &self.raw.creators
    }

    /// Normalized names of the creators whose type is exactly the author role.
    pub fn authors(&self) -> Vec<NormalizedName> {
        self.creators_by_role(&self.config.author_role)
    }

    /// The first author, if any.
    pub fn author(&self) -> Option<NormalizedName> {
        self.authors().into_iter().next()
    }

    /// Normalized names of the creators with the given type, in billing order.
    ///
    /// Matching is exact and case-sensitive.
    pub fn creators_by_role(&self, role: &str) -> Vec<NormalizedName> {
        self.raw
            .creators
            .iter()
            .filter(|creator| creator.creator_type == role)
            .map(|creator| NormalizedName::from(&creator.name))
            .collect()
    }

    /// Parses the publication date.
    ///
    /// A record without a date yields the empty [`NormalizedDate`]. A date that is
    /// present but unparseable yields `None`, so the two cases stay distinct.
    pub fn date(&self) -> Option<NormalizedDate> {
        let Some(text) = non_empty(self.raw.date.as_deref()) else {
            return Some(NormalizedDate::default());
        };

        let date = parse_date(text);
        if date.is_none() {
            debug!(key = %self.raw.key, date = text, "unparseable record date");
        }
        date
    }

    /// A short plain-text excerpt of the note, or an empty string without a note.
    pub fn note_excerpt(&self) -> String {
        match non_empty(self.raw.note.as_deref()) {
            Some(note) => note_excerpt(note, &self.extractor, &self.config),
            None => String::new(),
        }
    }

    /// Assembles the complete normalized view.
    pub fn values(&self) -> RecordView {
        let authors = self.authors();
        let first_author = authors.first().cloned();
        RecordView {
            key: self.key().to_string(),
            title: self.title(),
            short_title: self.short_title().map(str::to_string),
            date: self.date(),
            authors,
            first_author,
        }
    }

    /// The citation key embedded in the extra field, if any.
    pub fn citation_key(&self) -> Option<&str> {
        extract_citation_key(self.raw.extra.as_deref().unwrap_or(""))
    }
}

impl From<RawRecord> for RecordNormalizer {
    fn from(raw: RawRecord) -> Self {
        Self::new(raw)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
