//! Cross-field consistency validation for persisted job datasets.
//!
//! The engine re-derives the reference vocabularies independently of
//! generation and reports every defect it finds, never stopping early.

pub mod engine;
pub mod errors;
pub mod model;
pub mod report;

pub use engine::ValidationEngine;
pub use errors::EvalError;
pub use model::{EvaluateOptions, EvaluationResult, Violation};
pub use report::render_report;
