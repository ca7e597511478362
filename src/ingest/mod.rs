//! Survey Ingestion
//!
//! Turns CSV or JSON survey files into an ordered [`Survey`]. Rows whose
//! measured depth does not exceed the last accepted row are dropped here, so
//! the tortuosity engine only ever sees strictly increasing depth.
//!
//! # Usage
//!
//! ```ignore
//! use tortuosity_index::ingest::load_survey;
//!
//! let ingested = load_survey(Path::new("surveys/lateral_2h.csv"), None)?;
//! let outcome = tortuosity::process(&ingested.survey.stations, &config)?;
//! ```

mod csv;
mod json;

pub use self::csv::parse_csv;
pub use self::json::parse_json;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::{Station, Survey};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column '{0}' in survey header")]
    MissingColumn(&'static str),

    #[error("Survey input has no data rows")]
    EmptyInput,

    #[error("Cannot infer survey format from {0} (expected .csv or .json)")]
    UnknownFormat(PathBuf),
}

// ============================================================================
// Formats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyFormat {
    Csv,
    Json,
}

impl SurveyFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "txt" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Ingestion Result
// ============================================================================

/// A parsed survey plus what was discarded on the way in.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub survey: Survey,
    /// Rows dropped for not increasing in measured depth
    pub dropped_rows: usize,
    /// Rows skipped because a required value was missing or unparseable
    pub skipped_rows: usize,
}

/// Accumulates stations while enforcing strictly increasing depth.
#[derive(Debug, Default)]
struct StationCollector {
    stations: Vec<Station>,
    dropped_rows: usize,
    skipped_rows: usize,
}

impl StationCollector {
    fn push(&mut self, station: Station) {
        match self.stations.last() {
            Some(last) if station.measured_depth <= last.measured_depth => {
                debug!(
                    md = station.measured_depth,
                    last_md = last.measured_depth,
                    "Dropping non-increasing survey row"
                );
                self.dropped_rows += 1;
            }
            _ => self.stations.push(station),
        }
    }

    fn skip(&mut self) {
        self.skipped_rows += 1;
    }

    fn finish(self, name: &str) -> Result<Ingested, IngestError> {
        if self.stations.is_empty() {
            return Err(IngestError::EmptyInput);
        }
        info!(
            survey = name,
            stations = self.stations.len(),
            dropped = self.dropped_rows,
            skipped = self.skipped_rows,
            "Survey ingested"
        );
        Ok(Ingested {
            survey: Survey::new(name, self.stations),
            dropped_rows: self.dropped_rows,
            skipped_rows: self.skipped_rows,
        })
    }
}

// ============================================================================
// File Loading
// ============================================================================

/// Load a survey file. The survey is named after the file stem.
///
/// `format` overrides extension-based detection.
pub fn load_survey(path: &Path, format: Option<SurveyFormat>) -> Result<Ingested, IngestError> {
    let format = format
        .or_else(|| SurveyFormat::from_path(path))
        .ok_or_else(|| IngestError::UnknownFormat(path.to_path_buf()))?;

    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("survey");

    match format {
        SurveyFormat::Csv => parse_csv(name, &contents),
        SurveyFormat::Json => parse_json(name, &contents),
    }
}

/// Suffix repeated survey names with `_2`, `_3`, ... so every survey in a
/// batch is distinct. Returns how many surveys were renamed.
///
/// Surveys are named after their file stem, and report files after the
/// survey, so `a/well.csv` and `b/well.csv` would otherwise share one output.
pub fn make_names_unique(surveys: &mut [Survey]) -> usize {
    let originals: HashSet<String> = surveys.iter().map(|s| s.name.clone()).collect();
    let mut used: HashSet<String> = HashSet::with_capacity(surveys.len());
    let mut renamed = 0;

    for survey in surveys.iter_mut() {
        if used.insert(survey.name.clone()) {
            continue;
        }
        let mut suffix = 2_usize;
        let unique = loop {
            let candidate = format!("{}_{suffix}", survey.name);
            if !originals.contains(&candidate) && !used.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        warn!(survey = %survey.name, renamed_to = %unique, "Duplicate survey name");
        used.insert(unique.clone());
        survey.name = unique;
        renamed += 1;
    }

    renamed
}
