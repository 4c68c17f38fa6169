use interlang_core::types::{Catalog, LanguageRecord};

/// Visibility flags for one catalog group, parallel to the catalog's own
/// ordering. Keeping the flags positional (rather than keyed by code) means
/// a filter pass is a wholesale replacement: the most recently applied
/// query always wins, never an interleaving of partial updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupVisibility {
    pub base: bool,
    pub variants: Vec<bool>,
}

/// The current query and the per-record visibility it produced. Recomputed
/// on every query change and discarded when the overlay closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub groups: Vec<GroupVisibility>,
}

impl SearchState {
    /// Number of visible records, variants included.
    pub fn visible_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| usize::from(g.base) + g.variants.iter().filter(|&&v| v).count())
            .sum()
    }
}

/// Case-fold a query for matching. Matching is a literal substring test
/// over Unicode code points; there is deliberately no transliteration or
/// fuzzy layer, so a query in one script matches text in another script
/// only when that exact substring occurs.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// True if the folded query is a substring of the record's code, autonym,
/// or display title. The empty query matches every record.
pub fn record_matches(record: &LanguageRecord, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true;
    }
    record.code.to_lowercase().contains(folded_query)
        || record.autonym.to_lowercase().contains(folded_query)
        || record.display_title.to_lowercase().contains(folded_query)
}

/// Compute visibility for every record in the catalog.
///
/// Each variant's visibility is independent of its base and siblings; a
/// base is visible when it matches directly or when at least one of its
/// variants matches, so a variant stays findable even when its base does
/// not itself match, and vice versa. Pure and idempotent.
pub fn filter_catalog(catalog: &Catalog, query: &str) -> SearchState {
    let folded = normalize_query(query);
    let groups = catalog
        .groups
        .iter()
        .map(|group| {
            let variants: Vec<bool> = group
                .variants
                .iter()
                .map(|v| record_matches(v, &folded))
                .collect();
            let base = record_matches(&group.record, &folded) || variants.contains(&true);
            GroupVisibility { base, variants }
        })
        .collect();

    SearchState {
        query: query.to_string(),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interlang_core::types::LanguageGroup;

    fn record(code: &str, autonym: &str, title: &str) -> LanguageRecord {
        LanguageRecord {
            code: code.to_string(),
            display_title: title.to_string(),
            autonym: autonym.to_string(),
            url: format!("https://{code}.wikipedia.org/wiki/Page"),
            is_variant: false,
            parent_code: None,
        }
    }

    fn sample_catalog() -> Catalog {
        let mut be_x_old = record("be-x-old", "беларуская (тарашкевіца)", "Барак Абама");
        be_x_old.is_variant = true;
        be_x_old.parent_code = Some("be".to_string());

        Catalog {
            groups: vec![
                LanguageGroup {
                    record: record("be", "беларуская", "Барак Абама"),
                    variants: vec![be_x_old],
                },
                LanguageGroup {
                    record: record("uz", "oʻzbekcha/ўзбекча", "Barak Obama"),
                    variants: vec![],
                },
                LanguageGroup {
                    record: record("zh", "中文", "贝拉克·奥巴马"),
                    variants: vec![],
                },
            ],
        }
    }

    #[test]
    fn empty_query_makes_every_record_visible() {
        let state = filter_catalog(&sample_catalog(), "");
        assert_eq!(state.visible_count(), 4);
    }

    #[test]
    fn query_matches_code_autonym_or_title() {
        let catalog = sample_catalog();
        // Code match.
        assert_eq!(filter_catalog(&catalog, "uz").visible_count(), 1);
        // Autonym match in a non-Latin script.
        assert_eq!(filter_catalog(&catalog, "ўз").visible_count(), 1);
        // Title match.
        assert_eq!(filter_catalog(&catalog, "奥巴马").visible_count(), 1);
    }

    #[test]
    fn matching_is_case_folded() {
        let catalog = sample_catalog();
        assert_eq!(
            filter_catalog(&catalog, "ZH").visible_count(),
            filter_catalog(&catalog, "zh").visible_count()
        );
        // Cyrillic capital folds too.
        assert_eq!(filter_catalog(&catalog, "ЎЗ").visible_count(), 1);
    }

    #[test]
    fn base_becomes_visible_when_only_a_variant_matches() {
        let state = filter_catalog(&sample_catalog(), "тарашкевіца");
        // Both the variant and its base are visible; nothing else.
        assert_eq!(state.visible_count(), 2);
        assert!(state.groups[0].base);
        assert_eq!(state.groups[0].variants, vec![true]);
        assert!(!state.groups[1].base);
    }

    #[test]
    fn variant_visibility_is_independent_of_its_base() {
        // "be" is a substring of "be-x-old"'s code as well, so pick a query
        // matching the base's autonym only.
        let mut catalog = sample_catalog();
        catalog.groups[0].record.autonym = "base-only-name".to_string();
        let state = filter_catalog(&catalog, "base-only-name");
        assert!(state.groups[0].base);
        assert_eq!(state.groups[0].variants, vec![false]);
    }

    #[test]
    fn nonempty_query_visibility_is_a_subset_of_empty_query_visibility() {
        let catalog = sample_catalog();
        let all = filter_catalog(&catalog, "");
        for query in ["zh", "ўз", "обама", "q", ""] {
            let state = filter_catalog(&catalog, query);
            assert!(state.visible_count() <= all.visible_count(), "query {query:?}");
        }
    }

    #[test]
    fn empty_query_after_any_query_restores_full_visibility() {
        let catalog = sample_catalog();
        let before = filter_catalog(&catalog, "");
        let _narrowed = filter_catalog(&catalog, "тарашкевіца");
        let after = filter_catalog(&catalog, "");
        assert_eq!(before.groups, after.groups);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_catalog();
        assert_eq!(
            filter_catalog(&catalog, "zh").groups,
            filter_catalog(&catalog, "zh").groups
        );
    }

    #[test]
    fn query_whitespace_is_trimmed() {
        let catalog = sample_catalog();
        assert_eq!(filter_catalog(&catalog, "  uz ").visible_count(), 1);
        // All-whitespace behaves like the empty query.
        assert_eq!(filter_catalog(&catalog, "   ").visible_count(), 4);
    }
}
