use interlang_core::error::CatalogWarning;
use interlang_core::types::{Catalog, LanguageGroup, LanguageRecord, RawLanguageLink};
use std::collections::HashMap;
use tracing::warn;

/// Result of a catalog build: the catalog plus the recoverable data-quality
/// warnings encountered along the way. Warnings never abort the build.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub warnings: Vec<CatalogWarning>,
}

/// Normalize raw interlanguage links into a grouped catalog.
///
/// `links` is the page's ordered interlanguage-link list; `variants` is the
/// separately supplied script-variant list in the same shape, each entry's
/// `variant_of` naming its base code. Top-level order is preserved exactly
/// as received; the only relocation is nesting variants under their base.
///
/// The `parent_code` relation is resolved here, once; later stages never
/// re-derive it.
pub fn build_catalog(links: &[RawLanguageLink], variants: &[RawLanguageLink]) -> CatalogBuild {
    let mut warnings = Vec::new();
    let mut groups: Vec<LanguageGroup> = Vec::with_capacity(links.len());
    let mut index_by_code: HashMap<String, usize> = HashMap::new();
    let mut variant_queue: Vec<LanguageRecord> = Vec::new();

    // Pass 1: register top-level records in received order. Entries flagged
    // as variants (inline or from the separate list) are deferred so a
    // variant listed before its base still resolves.
    for (position, raw) in links.iter().enumerate() {
        let Some(mut record) = normalize_entry(raw, position, &mut warnings) else {
            continue;
        };
        if let Some(base) = raw.variant_of.as_deref() {
            record.is_variant = true;
            record.parent_code = Some(base.to_string());
            variant_queue.push(record);
            continue;
        }
        insert_top_level(record, &mut groups, &mut index_by_code, &mut warnings);
    }

    for (position, raw) in variants.iter().enumerate() {
        let Some(mut record) = normalize_entry(raw, links.len() + position, &mut warnings) else {
            continue;
        };
        record.is_variant = true;
        record.parent_code = Some(raw.variant_of.clone().unwrap_or_default());
        variant_queue.push(record);
    }

    // Pass 2: attach variants to their base in input order. A variant
    // naming a missing base is promoted to a top-level record rather than
    // dropped.
    for mut record in variant_queue {
        let base = record.parent_code.clone().unwrap_or_default();
        if let Some(&idx) = index_by_code.get(&base) {
            groups[idx].variants.push(record);
        } else {
            let warning = CatalogWarning::unresolved_variant(&record.code, &base);
            warn!(%warning, "promoting variant to top level");
            warnings.push(warning);
            record.is_variant = false;
            record.parent_code = None;
            insert_top_level(record, &mut groups, &mut index_by_code, &mut warnings);
        }
    }

    CatalogBuild {
        catalog: Catalog { groups },
        warnings,
    }
}

fn insert_top_level(
    record: LanguageRecord,
    groups: &mut Vec<LanguageGroup>,
    index_by_code: &mut HashMap<String, usize>,
    warnings: &mut Vec<CatalogWarning>,
) {
    if index_by_code.contains_key(&record.code) {
        let warning = CatalogWarning::duplicate_language_code(&record.code);
        warn!(%warning, "keeping first occurrence");
        warnings.push(warning);
        return;
    }
    index_by_code.insert(record.code.clone(), groups.len());
    groups.push(LanguageGroup {
        record,
        variants: Vec::new(),
    });
}

/// Normalize one raw entry. An entry missing code or url is excluded
/// entirely; a missing autonym falls back to the code, and a missing title
/// falls back to the autonym.
fn normalize_entry(
    raw: &RawLanguageLink,
    position: usize,
    warnings: &mut Vec<CatalogWarning>,
) -> Option<LanguageRecord> {
    if raw.code.trim().is_empty() {
        let warning = CatalogWarning::malformed_entry(format!("entry {position} has no code"));
        warn!(%warning, "excluding entry");
        warnings.push(warning);
        return None;
    }
    if raw.url.trim().is_empty() {
        let warning = CatalogWarning::malformed_entry(format!(
            "entry {position} ({}) has no url",
            raw.code
        ));
        warn!(%warning, "excluding entry");
        warnings.push(warning);
        return None;
    }

    let autonym = raw
        .autonym
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| raw.code.clone());
    let display_title = raw
        .title
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| autonym.clone());

    Some(LanguageRecord {
        code: raw.code.clone(),
        display_title,
        autonym,
        url: raw.url.clone(),
        is_variant: false,
        parent_code: None,
    })
}
