use anyhow::Result;
use interlang_core::config::Config;
use interlang_store::FrequencyStore;
use std::path::Path;

pub fn run(code: &str, store: Option<&Path>, config_file: Option<&Path>) -> Result<()> {
    let config = Config::load_with_file(None, config_file)?;
    let store_path = store
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.frequency_store_path());

    let store = FrequencyStore::new(store_path);
    let count = store.record_selection(code)?;
    println!("{code}: {count} selections ({})", store.path().display());
    Ok(())
}
