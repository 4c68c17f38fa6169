use interlang_core::types::{Catalog, FrequencyMap, LanguageRecord, PreferredSelection};
use std::cmp::Reverse;
use tracing::debug;

/// Select and order the preferred subset of a catalog's top-level records.
///
/// A record is eligible when its code has a strictly positive entry in the
/// frequency map. Eligible records are sorted by score descending with a
/// stable sort, so equal scores keep their original catalog order, then
/// truncated to `max_preferred`.
///
/// The device language and the current page's own language are never
/// injected: they are not valid link targets even when the frequency map
/// carries counts for them. Counts for codes absent from the catalog are
/// ignored without error. The frequency map is never mutated.
pub fn rank_preferred(
    catalog: &Catalog,
    frequencies: &FrequencyMap,
    device_language: &str,
    current_language: &str,
    max_preferred: usize,
) -> PreferredSelection {
    let mut scored: Vec<(u64, &LanguageRecord)> = catalog
        .groups
        .iter()
        .map(|g| &g.record)
        .filter(|r| r.code != device_language && r.code != current_language)
        .filter_map(|r| match frequencies.get(&r.code) {
            Some(&count) if count > 0 => Some((count, r)),
            _ => None,
        })
        .collect();

    // Stable sort on the score alone; catalog order is the tie-break.
    scored.sort_by_key(|&(score, _)| Reverse(score));
    scored.truncate(max_preferred);

    let selection: PreferredSelection = scored.into_iter().map(|(_, r)| r.clone()).collect();
    debug!(
        preferred = ?selection.iter().map(|r| r.code.as_str()).collect::<Vec<_>>(),
        eligible_limit = max_preferred,
        "ranked preferred languages"
    );
    selection
}
