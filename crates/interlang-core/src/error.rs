use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Recoverable data-quality issues found while building a catalog.
///
/// None of these abort catalog construction: the overlay must always render
/// something. They are returned alongside the catalog and logged, so a
/// degraded Language Source payload still produces a usable view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    #[error("unresolved variant: {code} references missing base {base}")]
    UnresolvedVariant { code: String, base: String },

    #[error("duplicate language code: {code}")]
    DuplicateLanguageCode { code: String },

    #[error("malformed entry: {reason}")]
    MalformedEntry { reason: String },
}

impl CatalogWarning {
    pub fn unresolved_variant(code: impl Into<String>, base: impl Into<String>) -> Self {
        Self::UnresolvedVariant {
            code: code.into(),
            base: base.into(),
        }
    }

    pub fn duplicate_language_code(code: impl Into<String>) -> Self {
        Self::DuplicateLanguageCode { code: code.into() }
    }

    pub fn malformed_entry(reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("corrupt frequency map: {0}")]
    Corrupt(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Convenience constructor for deserialization failures — use with
    /// `.map_err(StoreError::corrupt)`.
    pub fn corrupt<E: std::fmt::Display>(e: E) -> Self {
        Self::Corrupt(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("failed to parse config: {0}")]
    ParseError(String),

    #[error("invalid config value: {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
