use serde::{Deserialize, Serialize};

/// Options for dataset validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateOptions {
    /// Limit the number of violations echoed in the rendered report.
    pub max_examples: usize,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self { max_examples: 20 }
    }
}

/// One structural or referential defect found on a record. A single record
/// may contribute several violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub record_id: String,
    pub message: String,
}

impl Violation {
    pub fn new(record_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            message: message.into(),
        }
    }
}

/// Result of validating a persisted dataset.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub records_checked: u64,
    pub violations: Vec<Violation>,
    pub report: String,
    pub passed: bool,
}
