//! The front matter schema of a content page.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Mapping;
use thiserror::Error;

use super::timestamp::Timestamp;

/// Recognized string fields. Empty ones are written as `""`.
const STRING_FIELDS: [&str; 4] = ["title", "description", "slug", "image"];

/// Errors that can occur while decoding or encoding front matter.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid YAML front matter: {0}")]
    InvalidYaml(#[source] serde_yaml::Error),

    #[error("failed to encode front matter: {0}")]
    Encode(#[source] serde_yaml::Error),
}

/// Parsed front matter of a page.
///
/// Fields are declared in the order they are written back. Missing keys take
/// their type's default; keys outside the schema are kept in `extra` and
/// emitted after the known fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    pub date: Timestamp,
    pub lastmod: Timestamp,
    #[serde(deserialize_with = "null_as_default")]
    pub draft: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl Metadata {
    /// Decode a front matter block. A blank block yields the defaults.
    pub fn from_yaml(block: &str) -> Result<Self, MetadataError> {
        if block.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(block).map_err(MetadataError::InvalidYaml)
    }

    /// Encode every field, defaults included, as a YAML block ending in a newline.
    pub fn to_yaml(&self) -> Result<String, MetadataError> {
        let yaml = serde_yaml::to_string(self).map_err(MetadataError::Encode)?;
        Ok(double_quote_empty_strings(&yaml))
    }
}

/// serde_yaml writes empty strings as `''`; Hugo's own tooling writes `""`.
fn double_quote_empty_strings(yaml: &str) -> String {
    yaml.split_inclusive('\n')
        .map(|line| match line.trim_end_matches('\n').strip_suffix(": ''") {
            Some(key) if STRING_FIELDS.contains(&key) => format!("{key}: \"\"\n"),
            _ => line.to_string(),
        })
        .collect()
}

/// `key:` with no value reads as the default rather than failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
