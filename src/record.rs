//! Raw Zotero record schema.
//!
//! [`RawRecord`] is the shape the host application hands over: every field except
//! `key` is optional. Decoding from Zotero item JSON happens once here, at the
//! boundary, so the normalizer never has to re-check field presence.
//!
//! # Example
//!
//! ```
//! use zotero_record::RawRecord;
//!
//! let raw = RawRecord::from_json(r#"{
//!     "key": "ABCD1234",
//!     "title": "",
//!     "creators": [{"creatorType": "author", "name": "Grace Hopper"}]
//! }"#).unwrap();
//!
//! assert_eq!(raw.key, "ABCD1234");
//! assert_eq!(raw.title, None);
//! assert_eq!(raw.creators.len(), 1);
//! ```

use crate::{RecordError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single bibliographic record as exported by the reference manager.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Opaque unique identifier
    #[serde(default)]
    pub key: String,
    /// Full title
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Abbreviated title
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_title: Option<String>,
    /// Creators in billing order
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub creators: Vec<Creator>,
    /// Free-text publication date
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    /// Rich-text (HTML) note
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<String>,
    /// Free-text metadata, may embed a `Citation Key:` line
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra: Option<String>,
}

impl RawRecord {
    /// Decodes a single Zotero item from its JSON representation.
    ///
    /// Empty optional strings are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Json`] if the input is not a valid item object, and
    /// [`RecordError::MissingField`] if the item has no `key`.
    pub fn from_json(input: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(input)?;
        raw.validate()
    }

    /// Decodes either a JSON array of Zotero items or a single item object.
    ///
    /// # Errors
    ///
    /// Fails on the first item that does not decode, or with
    /// [`RecordError::InvalidFieldValue`] if the top-level value is neither an
    /// array nor an object.
    pub fn from_json_list(input: &str) -> Result<Vec<Self>> {
        match serde_json::from_str::<Value>(input)? {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            item @ Value::Object(_) => Ok(vec![Self::from_value(item)?]),
            other => Err(RecordError::InvalidFieldValue {
                field: "items".to_string(),
                message: format!("expected an object or an array, found {}", json_kind(&other)),
            }),
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        let raw: Self = serde_json::from_value(value)?;
        raw.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.key.is_empty() {
            return Err(RecordError::MissingField("key".to_string()));
        }
        Ok(self)
    }
}

/// One creator entry together with its role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    /// Role such as `"author"` or `"editor"`
    #[serde(rename = "creatorType", default)]
    pub creator_type: String,
    #[serde(flatten)]
    pub name: CreatorName,
}

impl Creator {
    /// Creates a creator with separate first and last names.
    pub fn structured(creator_type: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            creator_type: creator_type.to_string(),
            name: CreatorName::Structured {
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
            },
        }
    }

    /// Creates a creator whose name is a single free-text field.
    pub fn free_text(creator_type: &str, name: &str) -> Self {
        Self {
            creator_type: creator_type.to_string(),
            name: CreatorName::FreeText {
                name: name.to_string(),
            },
        }
    }
}

/// The two name shapes Zotero uses for creators.
///
/// The presence of a `name` field selects [`CreatorName::FreeText`]; anything else
/// decodes as [`CreatorName::Structured`], possibly with both parts absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatorName {
    FreeText {
        name: String,
    },
    Structured {
        #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },
}

fn non_empty_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Creator>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Creator>>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
