//! Creator name normalization.

use crate::record::CreatorName;
use serde::Serialize;
use tracing::debug;

/// A creator name reduced to first, last and full forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedName {
    /// Given name(s), absent only for structured names without one
    pub first_name: Option<String>,
    /// Family name, absent only for structured names without one
    pub last_name: Option<String>,
    /// Display form, always populated. Structured names always carry the
    /// separating space, with absent parts rendered as empty strings.
    pub full_name: String,
}

impl From<&CreatorName> for NormalizedName {
    fn from(name: &CreatorName) -> Self {
        match name {
            CreatorName::FreeText { name } => split_free_text(name),
            CreatorName::Structured {
                first_name,
                last_name,
            } => {
                if first_name.is_none() && last_name.is_none() {
                    debug!("creator entry has neither a name nor first/last parts");
                }
                let full_name = format!(
                    "{} {}",
                    first_name.as_deref().unwrap_or(""),
                    last_name.as_deref().unwrap_or("")
                );
                Self {
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    full_name,
                }
            }
        }
    }
}

/// Splits a free-text name on its last space.
///
/// A name without any space keeps everything as the last name and an empty first
/// name, so `"Plato"` yields `("", "Plato")`.
fn split_free_text(name: &str) -> NormalizedName {
    let (first, last) = match name.rfind(' ') {
        Some(delimiter) => (&name[..=delimiter], &name[delimiter..]),
        None => ("", name),
    };
    NormalizedName {
        first_name: Some(first.trim().to_string()),
        last_name: Some(last.trim().to_string()),
        full_name: name.to_string(),
    }
}
