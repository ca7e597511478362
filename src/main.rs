//! Tortuosity Index CLI
//!
//! Computes the cumulative Tortuosity Index for one or more directional
//! survey files.
//!
//! # Usage
//!
//! ```bash
//! # One survey, summary only
//! tortuosity-index surveys/lateral_2h.csv
//!
//! # Several surveys, per-station results written as JSON
//! tortuosity-index surveys/*.json --output-dir results --json
//!
//! # Uncorrected index with a custom config
//! tortuosity-index survey.csv --config pad_b.toml --no-frequency-correction
//! ```
//!
//! # Environment Variables
//!
//! - `TORTUOSITY_CONFIG`: Path to a TOML config (when `--config` is absent)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};

use tortuosity_index::config::AnalysisConfig;
use tortuosity_index::ingest::{self, SurveyFormat};
use tortuosity_index::types::Survey;
use tortuosity_index::{report, tortuosity};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Detect from file extension
    Auto,
    Csv,
    Json,
}

impl InputFormat {
    const fn survey_format(self) -> Option<SurveyFormat> {
        match self {
            Self::Auto => None,
            Self::Csv => Some(SurveyFormat::Csv),
            Self::Json => Some(SurveyFormat::Json),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tortuosity-index")]
#[command(about = "Wellbore Tortuosity Index from directional survey data")]
#[command(version)]
struct CliArgs {
    /// Survey files (CSV with header row, or JSON)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Input format for all files
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Directory for per-station result files (none written if omitted)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Write results as JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// Path to a TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report the uncorrected index (survey frequency scaling fixed at 1.0)
    #[arg(long)]
    no_frequency_correction: bool,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AnalysisConfig::load(),
    };
    if args.no_frequency_correction {
        config.analysis.apply_frequency_correction = false;
    }

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    // Ingestion is I/O bound and cheap; analysis runs on the rayon pool
    let mut failures = 0_usize;
    let mut surveys: Vec<Survey> = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        match ingest::load_survey(path, args.format.survey_format()) {
            Ok(ingested) => surveys.push(ingested.survey),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to load survey");
                failures += 1;
            }
        }
    }

    // Report files and summary lines are keyed by survey name
    ingest::make_names_unique(&mut surveys);

    info!(surveys = surveys.len(), "Analyzing surveys");
    let results = tortuosity::analyze_batch(&surveys, &config);

    for (survey, result) in surveys.iter().zip(results) {
        match result {
            Ok(outcome) => {
                println!("{:<32} {}", survey.name, outcome);
                if let Some(dir) = &args.output_dir {
                    if let Err(e) = report::export(dir, &survey.name, &outcome, &config, args.json)
                    {
                        error!(survey = %survey.name, error = %e, "Failed to write report");
                        failures += 1;
                    }
                }
            }
            Err(e) => {
                println!("{:<32} FAILED: {}", survey.name, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} failure(s) across {} survey inputs", args.inputs.len());
    }
    Ok(())
}
