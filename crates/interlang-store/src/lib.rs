//! JSON-file-backed Usage Store for the language-selection engine.
//!
//! The store persists a map from language code to the number of times the
//! user has previously navigated to that language. The engine only ever
//! reads the map; writes happen here, when a selection is recorded.

use interlang_core::error::StoreError;
use interlang_core::types::FrequencyMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

/// Frequency map store over a single JSON file.
pub struct FrequencyStore {
    path: PathBuf,
}

impl FrequencyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted frequency map.
    ///
    /// A missing file is the empty map (a fresh profile is not an error).
    /// A corrupt file also degrades to the empty map with a warning: the
    /// overlay must render even when the stored counts are unusable.
    pub fn load(&self) -> FrequencyMap {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return FrequencyMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "frequency store unreadable, using empty map");
                return FrequencyMap::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "frequency store corrupt, using empty map");
                FrequencyMap::new()
            }
        }
    }

    /// Record one selection of `code`: increment its count and persist the
    /// whole map atomically (write to a temp file in the same directory,
    /// then rename over the target).
    pub fn record_selection(&self, code: &str) -> Result<u64, StoreError> {
        let mut map = self.load();
        let count = map.entry(code.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let new_count = *count;

        self.save(&map)?;
        Ok(new_count)
    }

    /// Persist `map` atomically, creating the parent directory if needed.
    pub fn save(&self, map: &FrequencyMap) -> Result<(), StoreError> {
        let parent_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        serde_json::to_writer(BufWriter::new(&temp_file), map).map_err(StoreError::corrupt)?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FrequencyStore {
        FrequencyStore::new(dir.path().join("langmap.json"))
    }

    #[test]
    fn missing_file_is_the_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn record_selection_increments_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.record_selection("zh").unwrap(), 1);
        assert_eq!(store.record_selection("zh").unwrap(), 2);
        assert_eq!(store.record_selection("ko").unwrap(), 1);

        // A fresh handle over the same file sees the persisted counts.
        let reopened = store_in(&dir);
        let map = reopened.load();
        assert_eq!(map.get("zh"), Some(&2));
        assert_eq!(map.get("ko"), Some(&1));
    }

    #[test]
    fn corrupt_file_degrades_to_the_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json {").unwrap();

        assert!(store.load().is_empty());
        // Recording over a corrupt store starts fresh rather than failing.
        assert_eq!(store.record_selection("uz").unwrap(), 1);
        assert_eq!(store.load().get("uz"), Some(&1));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FrequencyStore::new(dir.path().join("nested/data/langmap.json"));
        store.save(&FrequencyMap::from([("ar".to_string(), 3)])).unwrap();
        assert_eq!(store.load().get("ar"), Some(&3));
    }

    #[test]
    fn stored_shape_is_a_plain_code_to_count_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.record_selection("zh-min-nan").unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["zh-min-nan"], 1);
    }
}
