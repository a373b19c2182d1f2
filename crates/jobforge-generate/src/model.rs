use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where run artifacts are written.
    pub out_dir: PathBuf,
    /// Seed for the run's random source.
    pub seed: u64,
    /// Base date for start-date offsets; today when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_date: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("runs"),
            seed: 42,
            base_date: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub records_requested: u32,
    pub records_generated: u32,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
