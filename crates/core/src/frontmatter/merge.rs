//! Override merge of a partial front matter update.

use serde::Deserialize;
use serde_yaml::Mapping;

use super::metadata::{Metadata, MetadataError};
use super::timestamp::Timestamp;

/// A partial [`Metadata`] where every field records whether it was given.
///
/// `tags: []` is a present, empty list and clears the page's tags; omitting
/// `tags` leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetadataPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub image: Option<String>,
    pub date: Option<Timestamp>,
    pub lastmod: Option<Timestamp>,
    pub draft: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Mapping,
}

impl MetadataPatch {
    /// Decode a YAML fragment. A blank fragment is an empty patch.
    pub fn from_yaml(fragment: &str) -> Result<Self, MetadataError> {
        if fragment.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(fragment).map_err(MetadataError::InvalidYaml)
    }
}

impl Metadata {
    /// Apply `patch` with override semantics.
    pub fn apply(&mut self, patch: MetadataPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.description, patch.description);
        set(&mut self.slug, patch.slug);
        set(&mut self.image, patch.image);
        set(&mut self.date, patch.date);
        set(&mut self.lastmod, patch.lastmod);
        set(&mut self.draft, patch.draft);
        set(&mut self.tags, patch.tags);
        set(&mut self.categories, patch.categories);
        set(&mut self.keywords, patch.keywords);

        for (key, value) in patch.extra {
            self.extra.insert(key, value);
        }
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    fn existing() -> Metadata {
        Metadata::from_yaml("title: T\ntags: [a, b]\ndraft: true\nweight: 1\n").unwrap()
    }

    #[test]
    fn present_fields_override() {
        let mut fm = existing();
        fm.apply(MetadataPatch::from_yaml("tags: [c]").unwrap());
        assert_eq!(fm.tags, vec!["c"]);
        assert_eq!(fm.title, "T");
        assert!(fm.draft);
    }

    #[test]
    fn explicit_zero_values_still_override() {
        let mut fm = existing();
        fm.apply(MetadataPatch::from_yaml("title: ''\ndraft: false\ntags: []").unwrap());
        assert_eq!(fm.title, "");
        assert!(!fm.draft);
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn null_values_leave_field_untouched() {
        let mut fm = existing();
        fm.apply(MetadataPatch::from_yaml("title: ~").unwrap());
        assert_eq!(fm.title, "T");
    }

    #[test]
    fn dates_override() {
        let mut fm = existing();
        fm.apply(MetadataPatch::from_yaml("lastmod: 2024-03-01").unwrap());
        assert_eq!(fm.lastmod.to_string(), "2024-03-01T00:00:00Z");
        assert!(fm.date.is_zero());
    }

    #[test]
    fn extra_keys_merge() {
        let mut fm = existing();
        fm.apply(MetadataPatch::from_yaml("weight: 5\nseries: rust").unwrap());
        assert_eq!(fm.extra.get("weight"), Some(&Value::from(5)));
        assert_eq!(fm.extra.get("series"), Some(&Value::from("rust")));
    }

    #[test]
    fn blank_fragment_is_empty_patch() {
        assert_eq!(MetadataPatch::from_yaml("  ").unwrap(), MetadataPatch::default());
    }

    #[test]
    fn malformed_fragment_is_invalid_yaml() {
        let err = MetadataPatch::from_yaml("tags: [unclosed").unwrap_err();
        assert!(matches!(err, MetadataError::InvalidYaml(_)));
    }
}
