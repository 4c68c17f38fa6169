use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw interlanguage link as supplied by the Language Source.
///
/// The wire shape uses `lang` and `langname` for the code and autonym; the
/// serde renames preserve that contract. Script variants arrive in the same
/// shape with `variant_of` naming the base language code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLanguageLink {
    #[serde(rename = "lang")]
    pub code: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "langname", default)]
    pub autonym: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_of: Option<String>,
}

/// One addressable language target after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// Language code, unique among top-level records.
    pub code: String,
    /// Page title in that language; falls back to the autonym when the
    /// source payload carries no localized title.
    pub display_title: String,
    /// The language's name as written by its own speakers.
    pub autonym: String,
    /// Destination link.
    pub url: String,
    /// True when this record is a script/orthography variant of another
    /// language rather than an independent language.
    pub is_variant: bool,
    /// Set iff `is_variant`; identifies the base record this nests under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

/// A top-level language together with its nested script variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageGroup {
    pub record: LanguageRecord,
    /// Empty unless at least one variant referenced this base.
    pub variants: Vec<LanguageRecord>,
}

impl LanguageGroup {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

/// Ordered sequence of top-level languages, insertion order preserved as
/// received from the Language Source. Built once per overlay instantiation
/// and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<LanguageGroup>,
}

impl Catalog {
    /// Number of top-level records.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total record count, variants included.
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|g| 1 + g.variants.len()).sum()
    }

    /// Iterate every record, each base followed by its variants.
    pub fn iter_records(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.groups
            .iter()
            .flat_map(|g| std::iter::once(&g.record).chain(g.variants.iter()))
    }

    /// True if `code` names a top-level record.
    pub fn contains_code(&self, code: &str) -> bool {
        self.groups.iter().any(|g| g.record.code == code)
    }
}

/// Mapping from language code to a non-negative usage count. Owned by the
/// Usage Store; the engine only reads it.
pub type FrequencyMap = HashMap<String, u64>;

/// Ordered subset of top-level records chosen by the frequency ranker.
/// Never contains a variant record and never contains duplicates.
pub type PreferredSelection = Vec<LanguageRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str) -> LanguageRecord {
        LanguageRecord {
            code: code.to_string(),
            display_title: code.to_string(),
            autonym: code.to_string(),
            url: format!("https://{code}.example.org/wiki/Page"),
            is_variant: false,
            parent_code: None,
        }
    }

    #[test]
    fn catalog_counts_include_variants() {
        let mut variant = record("be-x-old");
        variant.is_variant = true;
        variant.parent_code = Some("be".into());

        let catalog = Catalog {
            groups: vec![
                LanguageGroup {
                    record: record("be"),
                    variants: vec![variant],
                },
                LanguageGroup {
                    record: record("ko"),
                    variants: vec![],
                },
            ],
        };

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_records(), 3);
        assert!(catalog.contains_code("be"));
        assert!(!catalog.contains_code("be-x-old"));
        let codes: Vec<&str> = catalog.iter_records().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["be", "be-x-old", "ko"]);
    }

    #[test]
    fn raw_link_deserializes_wire_field_names() {
        let raw: RawLanguageLink = serde_json::from_str(
            r#"{"lang":"uz","url":"https://uz.wikipedia.org/wiki/Barak_Obama","title":"Barak Obama","langname":"oʻzbekcha/ўзбекча"}"#,
        )
        .unwrap();
        assert_eq!(raw.code, "uz");
        assert_eq!(raw.autonym.as_deref(), Some("oʻzbekcha/ўзбекча"));
        assert_eq!(raw.variant_of, None);
    }
}
