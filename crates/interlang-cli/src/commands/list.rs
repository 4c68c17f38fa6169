use crate::source;
use anyhow::Result;
use interlang_core::config::Config;
use interlang_engine::{LanguageOverlayView, build_catalog};
use interlang_store::FrequencyStore;
use std::path::Path;
use tracing::debug;

pub fn run(
    links: &Path,
    store: Option<&Path>,
    query: Option<&str>,
    device_language: &str,
    current_language: &str,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = Config::load_with_file(None, config_file)?;
    let payload = source::load_payload(links)?;
    let build = build_catalog(&payload.languages, &payload.variants);
    debug!(
        languages = payload.languages.len(),
        variants = payload.variants.len(),
        warnings = build.warnings.len(),
        "built catalog"
    );

    let store_path = store
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.frequency_store_path());
    let frequencies = FrequencyStore::new(store_path).load();

    let mut view = LanguageOverlayView::new(
        build.catalog,
        &frequencies,
        device_language,
        current_language,
        &config.engine,
    );
    if let Some(q) = query {
        view.filter_languages(q);
    }

    print_view(&view);
    Ok(())
}

/// Render the view model the way a Renderer would: hidden entries are
/// suppressed, preferred entries are kept and marked when highlighted.
fn print_view(view: &LanguageOverlayView) {
    if !view.preferred.is_empty() {
        println!("Preferred languages:");
        for entry in &view.preferred {
            let marker = if entry.highlighted { " *" } else { "" };
            println!(
                "  {} — {} ({}){marker}",
                entry.record.code, entry.record.autonym, entry.record.display_title
            );
        }
        println!();
    }

    let total = view
        .groups
        .iter()
        .map(|g| 1 + g.variants.len())
        .sum::<usize>();
    println!("All languages ({} of {} visible):", view.visible_count(), total);
    for group in &view.groups {
        if group.visible {
            println!(
                "  {} — {} ({})",
                group.record.code, group.record.autonym, group.record.display_title
            );
        }
        for variant in &group.variants {
            if variant.visible {
                println!(
                    "    {} — {} ({})",
                    variant.record.code, variant.record.autonym, variant.record.display_title
                );
            }
        }
    }
}
