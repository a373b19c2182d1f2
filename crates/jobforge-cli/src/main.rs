use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobforge_core::{Settings, Vocabulary};
use jobforge_eval::{EvalError, EvaluateOptions, ValidationEngine};
use jobforge_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] jobforge_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("validation error: {0}")]
    Eval(#[from] EvalError),
}

#[derive(Parser, Debug)]
#[command(name = "jobforge", version, about = "Synthetic staffing dataset toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a synthetic job dataset.
    Generate(GenerateArgs),
    /// Validate a previously generated dataset.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Directory holding settings.toml and the vocabulary documents.
    #[arg(long, default_value = "config")]
    config: PathBuf,
    /// Output directory for runs.
    #[arg(long, default_value = "runs")]
    out_dir: PathBuf,
    /// Seed for the run's random source.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to a jobs.csv dataset.
    dataset: PathBuf,
    /// Directory holding the vocabulary documents.
    #[arg(long, default_value = "config")]
    config: PathBuf,
    /// Number of violations echoed in the report.
    #[arg(long, default_value_t = 20)]
    max_examples: usize,
    /// Fail the process when violations are found.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    // Configuration defects abort here, before any record is generated.
    let settings = Settings::load(&args.config.join("settings.toml"))?;
    let vocab = Vocabulary::load(&args.config)?;

    info!(
        config = %args.config.display(),
        seed = args.seed,
        records = settings.record_count,
        "starting generation"
    );

    let options = GenerateOptions {
        out_dir: args.out_dir,
        seed: args.seed,
        base_date: None,
    };
    let result = GenerationEngine::new(options).run(&settings, &vocab)?;
    println!(
        "wrote {} records to {}",
        result.report.records_generated,
        result.dataset_path.display()
    );
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let vocab = Vocabulary::load(&args.config)?;

    info!(
        dataset = %args.dataset.display(),
        config = %args.config.display(),
        strict = args.strict,
        "starting validation"
    );

    let options = EvaluateOptions {
        max_examples: args.max_examples,
    };
    let result = ValidationEngine::new(options).run(&args.dataset, &vocab)?;
    println!("{}", result.report);

    if args.strict && !result.passed {
        return Err(CliError::Eval(EvalError::Violations(
            result.violations.len() as u64,
        )));
    }
    Ok(())
}
