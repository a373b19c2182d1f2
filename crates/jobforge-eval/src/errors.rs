use thiserror::Error;

/// Errors emitted by the validation engine.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The dataset file is structurally unreadable (missing columns, bad CSV).
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// Strict mode: the dataset carried this many violations.
    #[error("validation failed with {0} violation(s)")]
    Violations(u64),
    #[error(transparent)]
    Config(#[from] jobforge_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
