use crate::filter::{filter_catalog, normalize_query, record_matches};
use crate::ranker::rank_preferred;
use interlang_core::config::EngineConfig;
use interlang_core::types::{Catalog, FrequencyMap, LanguageRecord};
use serde::Serialize;

/// One entry of the preferred-languages section. Preferred entries are
/// never hidden by filtering, only highlighted when the current non-empty
/// query matches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferredEntry {
    pub record: LanguageRecord,
    pub highlighted: bool,
}

/// A nested variant entry of the all-languages section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantEntry {
    pub record: LanguageRecord,
    pub visible: bool,
}

/// A top-level entry of the all-languages section with its nested variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    pub record: LanguageRecord,
    pub visible: bool,
    pub variants: Vec<VariantEntry>,
}

/// The view model handed to the Renderer.
///
/// Construction is a pure function of the catalog, the frequency map, and
/// the device/current language codes; the only state that changes afterward
/// is the query and the visibility flags it derives. Records are never
/// removed from the view — `visible=false` is the Renderer's cue to
/// suppress display.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageOverlayView {
    pub preferred: Vec<PreferredEntry>,
    pub groups: Vec<GroupEntry>,
    query: String,
    #[serde(skip)]
    catalog: Catalog,
}

impl LanguageOverlayView {
    /// Build the view model once per overlay instantiation. The frequency
    /// map is read here and not resubscribed to afterward.
    pub fn new(
        catalog: Catalog,
        frequencies: &FrequencyMap,
        device_language: &str,
        current_language: &str,
        config: &EngineConfig,
    ) -> Self {
        let preferred = rank_preferred(
            &catalog,
            frequencies,
            device_language,
            current_language,
            config.max_preferred,
        )
        .into_iter()
        .map(|record| PreferredEntry {
            record,
            highlighted: false,
        })
        .collect();

        let groups = catalog
            .groups
            .iter()
            .map(|group| GroupEntry {
                record: group.record.clone(),
                visible: true,
                variants: group
                    .variants
                    .iter()
                    .map(|v| VariantEntry {
                        record: v.clone(),
                        visible: true,
                    })
                    .collect(),
            })
            .collect();

        Self {
            preferred,
            groups,
            query: String::new(),
            catalog,
        }
    }

    /// Re-run the search filter for `query`, replacing the previous
    /// visibility state wholesale. Synchronous: the state observed after
    /// this call is exactly the result of `query`, regardless of what was
    /// applied before.
    pub fn filter_languages(&mut self, query: &str) {
        let state = filter_catalog(&self.catalog, query);
        for (group, vis) in self.groups.iter_mut().zip(&state.groups) {
            group.visible = vis.base;
            for (variant, &visible) in group.variants.iter_mut().zip(&vis.variants) {
                variant.visible = visible;
            }
        }

        let folded = normalize_query(query);
        for entry in &mut self.preferred {
            entry.highlighted = !folded.is_empty() && record_matches(&entry.record, &folded);
        }

        self.query = query.to_string();
    }

    /// The raw query most recently applied.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of visible records in the all-languages section, variants
    /// included.
    pub fn visible_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| usize::from(g.visible) + g.variants.iter().filter(|v| v.visible).count())
            .sum()
    }
}
