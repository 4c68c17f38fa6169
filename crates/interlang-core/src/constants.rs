/// Default number of entries in the preferred-languages section.
pub const DEFAULT_MAX_PREFERRED: usize = 3;

/// File name of the persisted frequency map.
///
/// The counts are keyed by language code; the file lives under the data
/// directory and is created on first recorded selection.
pub const FREQUENCY_STORE_FILE: &str = "langmap.json";

/// Default data directory name under home.
pub const DEFAULT_DATA_DIR: &str = ".interlang";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = ".interlang/config.toml";
