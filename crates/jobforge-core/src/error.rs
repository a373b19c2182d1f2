use thiserror::Error;

/// Core error type shared across Jobforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings document is missing a group or violates a bound.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    /// A vocabulary document violates internal invariants.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by Jobforge crates.
pub type Result<T> = std::result::Result<T, Error>;
