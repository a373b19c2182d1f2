use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use jobforge_core::{JobRecord, Settings, Vocabulary};

use crate::errors::GenerationError;
use crate::generator::{generate_record, RecordContext};
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::write_jobs_csv;
use crate::rules::RuleTables;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_dir: PathBuf,
    pub dataset_path: PathBuf,
    pub report: GenerationReport,
    pub records: Vec<JobRecord>,
}

/// Entry point for producing a job dataset from settings + vocabularies.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run a full generation. Either the complete dataset lands on disk or
    /// the run aborts with an error and no dataset.
    pub fn run(
        &self,
        settings: &Settings,
        vocab: &Vocabulary,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        settings.validate()?;
        vocab.validate()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;
        std::fs::write(
            run_dir.join("resolved_settings.json"),
            serde_json::to_vec_pretty(settings)?,
        )?;

        let rules = RuleTables::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let base_date = self
            .options
            .base_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        let ctx = RecordContext {
            settings,
            vocab,
            rules: &rules,
            base_date,
        };

        info!(
            run_id = %run_id,
            seed = self.options.seed,
            records = settings.record_count,
            "generation started"
        );

        // Strictly sequential: each record samples similar projects from
        // the ids of all earlier records.
        let mut records = Vec::with_capacity(settings.record_count as usize);
        let mut existing_ids: Vec<String> = Vec::new();
        for index in 1..=settings.record_count {
            let record = generate_record(&ctx, index, &existing_ids, &mut rng)?;
            existing_ids.push(record.id.clone());
            records.push(record);
        }

        let dataset_path = run_dir.join("jobs.csv");
        let bytes_written = write_jobs_csv(&dataset_path, &records)?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            seed: self.options.seed,
            records_requested: settings.record_count,
            records_generated: records.len() as u32,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        std::fs::write(
            run_dir.join("generation_report.json"),
            serde_json::to_vec_pretty(&report)?,
        )?;

        info!(
            run_id = %run_id,
            records_generated = report.records_generated,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            run_dir,
            dataset_path,
            report,
            records,
        })
    }
}
