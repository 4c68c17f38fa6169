use anyhow::{Context, Result};
use interlang_core::types::RawLanguageLink;
use serde::Deserialize;
use std::path::Path;

/// A Language Source payload as resolved by the host platform: the page's
/// ordered interlanguage links plus a separately supplied script-variant
/// list. The engine never fetches this itself; it is read here, once, and
/// passed in by value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageSourcePayload {
    #[serde(default)]
    pub languages: Vec<RawLanguageLink>,
    #[serde(default)]
    pub variants: Vec<RawLanguageLink>,
}

pub fn load_payload(path: &Path) -> Result<LanguageSourcePayload> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read links file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse links file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../testdata/fixtures/obama-langlinks.json")
    }

    #[test]
    fn fixture_payload_parses_with_wire_field_names() {
        let payload = load_payload(&fixture_path()).unwrap();
        assert_eq!(payload.languages.len(), 9);
        assert_eq!(payload.variants.len(), 1);

        let ar = &payload.languages[0];
        assert_eq!(ar.code, "ar");
        assert_eq!(ar.autonym.as_deref(), Some("العربية"));

        let variant = &payload.variants[0];
        assert_eq!(variant.code, "be-x-old");
        assert_eq!(variant.variant_of.as_deref(), Some("be"));
    }

    #[test]
    fn missing_variants_key_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(
            &path,
            r#"{"languages":[{"lang":"ko","url":"https://ko.wikipedia.org/wiki/P","title":"버락 오바마","langname":"한국어"}]}"#,
        )
        .unwrap();

        let payload = load_payload(&path).unwrap();
        assert_eq!(payload.languages.len(), 1);
        assert!(payload.variants.is_empty());
    }

    #[test]
    fn unreadable_file_reports_the_path() {
        let err = load_payload(Path::new("/nonexistent/links.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/links.json"));
    }
}
