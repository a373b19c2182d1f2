//! Generate a dataset from the repository's sample configuration.

use std::path::PathBuf;

use jobforge_core::{Settings, Vocabulary};
use jobforge_generate::{GenerateOptions, GenerationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config");
    let settings = Settings::load(&config.join("settings.toml"))?;
    let vocab = Vocabulary::load(&config)?;

    let result = GenerationEngine::new(GenerateOptions::default()).run(&settings, &vocab)?;
    println!("run dir: {}", result.run_dir.display());
    println!(
        "records: {} ({} bytes)",
        result.report.records_generated, result.report.bytes_written
    );
    Ok(())
}
