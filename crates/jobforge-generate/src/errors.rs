use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A weighted-choice domain was empty or carried zero total weight.
    #[error("empty sampling domain: {0}")]
    EmptyDomain(String),
    #[error(transparent)]
    Config(#[from] jobforge_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
