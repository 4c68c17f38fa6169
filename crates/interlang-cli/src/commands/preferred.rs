use crate::source;
use anyhow::Result;
use interlang_core::config::Config;
use interlang_engine::{build_catalog, rank_preferred};
use interlang_store::FrequencyStore;
use std::path::Path;

pub fn run(
    links: &Path,
    store: Option<&Path>,
    device_language: &str,
    current_language: &str,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = Config::load_with_file(None, config_file)?;
    let payload = source::load_payload(links)?;
    let build = build_catalog(&payload.languages, &payload.variants);

    let store_path = store
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.frequency_store_path());
    let frequencies = FrequencyStore::new(store_path).load();

    let preferred = rank_preferred(
        &build.catalog,
        &frequencies,
        device_language,
        current_language,
        config.engine.max_preferred,
    );

    if preferred.is_empty() {
        println!(
            "No preferred languages yet ({} available). Record selections with `interlang record <code>`.",
            build.catalog.len()
        );
        return Ok(());
    }

    for (rank, record) in preferred.iter().enumerate() {
        let count = frequencies.get(&record.code).copied().unwrap_or(0);
        println!(
            "{}. {} — {} ({count} selections)",
            rank + 1,
            record.code,
            record.autonym
        );
    }
    Ok(())
}
