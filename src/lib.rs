//! Normalized, display-ready views of Zotero bibliographic records.
//!
//! `zotero-record` takes a single raw item as exported by the Zotero reference
//! manager and exposes consistent fields for downstream formatting code, whatever
//! subset of optional fields the item actually populates.
//!
//! # Key Features
//!
//! - **Title resolution**: title, then short title, then a note excerpt, then a
//!   placeholder
//! - **Creator names**: structured (`firstName`/`lastName`) and free-text (`name`)
//!   creators reduced to one [`NormalizedName`] shape
//! - **Dates**: free-text dates parsed into calendar parts, with unparseable dates
//!   kept distinct from missing ones
//! - **Note excerpts**: HTML notes reduced to plain text through a pluggable
//!   [`TextExtractor`]
//! - **Citation keys**: `Citation Key: <token>` markers found in the extra field
//!
//! # Basic Usage
//!
//! ```rust
//! use zotero_record::{RawRecord, RecordNormalizer};
//!
//! let raw = RawRecord::from_json(r#"{
//!     "key": "ABCD1234",
//!     "title": "Notes on the Analytical Engine",
//!     "creators": [
//!         {"creatorType": "author", "firstName": "Ada", "lastName": "Lovelace"},
//!         {"creatorType": "editor", "name": "Richard Taylor"}
//!     ],
//!     "date": "1843-10-01",
//!     "extra": "Citation Key: lovelace1843"
//! }"#).unwrap();
//!
//! let record = RecordNormalizer::new(raw);
//! let view = record.values();
//!
//! assert_eq!(view.title, "Notes on the Analytical Engine");
//! assert_eq!(view.authors.len(), 1);
//! assert_eq!(view.first_author.unwrap().full_name, "Ada Lovelace");
//! assert_eq!(view.date.unwrap().year, Some(1843));
//! assert_eq!(record.citation_key(), Some("lovelace1843"));
//! ```
//!
//! # Error Handling
//!
//! Normalization itself never fails: missing fields degrade to empty values and
//! an unparseable date is reported as `None` by [`RecordNormalizer::date`].
//! Errors only come from decoding raw JSON, through [`RecordError`]:
//!
//! ```rust
//! use zotero_record::{RawRecord, RecordError};
//!
//! match RawRecord::from_json(r#"{"title": "Orphan"}"#) {
//!     Ok(raw) => println!("Decoded {}", raw.key),
//!     Err(RecordError::MissingField(field)) => eprintln!("Missing {}", field),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! # Thread Safety
//!
//! A [`RecordNormalizer`] holds no interior state and is `Send + Sync` whenever
//! its text extractor is.

use thiserror::Error;

pub mod config;
pub mod date;
pub mod excerpt;
pub mod name;
pub mod normalizer;
pub mod record;
mod regex;
mod utils;

// Reexports
pub use config::NormalizerConfig;
pub use date::NormalizedDate;
pub use excerpt::{HtmlTextExtractor, TextExtractor};
pub use name::NormalizedName;
pub use normalizer::{RecordNormalizer, RecordView};
pub use record::{Creator, CreatorName, RawRecord};
pub use utils::extract_citation_key;

/// A specialized Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Represents errors that can occur while decoding raw records.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field value: {field} - {message}")]
    InvalidFieldValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display() {
        let error = RecordError::MissingField("key".to_string());
        assert_eq!(error.to_string(), "Missing required field: key");

        let error = RecordError::InvalidFieldValue {
            field: "items".to_string(),
            message: "expected an object or an array, found a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid field value: items - expected an object or an array, found a number"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = RecordError::from(err);
        assert!(error.to_string().starts_with("JSON error: "));
    }
}
