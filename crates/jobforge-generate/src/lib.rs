//! Rule-based synthetic job dataset generation for Jobforge.
//!
//! This crate couples service lines to plausible roles and skill
//! categories, allocates staffing headcount across weighted (level, role)
//! buckets, and writes the resulting records as CSV.

pub mod allocator;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod model;
pub mod output;
pub mod rules;
pub mod sampler;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use rules::RuleTables;
