//! Result export
//!
//! Per-station results as CSV (columns `md,inc,azi,x,y,z,vs,is_inflection,
//! ti,cumulative_ti` followed by a `Final Tortuosity Index` footer) or as a
//! JSON document carrying survey metadata.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::types::{ProcessedStation, SurveyOutcome};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================================
// Records
// ============================================================================

/// Flat per-station row shared by both output formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub md: f64,
    pub inc: f64,
    pub azi: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vs: Option<f64>,
    pub is_inflection: bool,
    pub ti: f64,
    pub cumulative_ti: Option<f64>,
}

impl From<&ProcessedStation> for StationRecord {
    fn from(p: &ProcessedStation) -> Self {
        let s = &p.station;
        Self {
            md: s.measured_depth,
            inc: s.inclination,
            azi: s.azimuth,
            x: s.position.x,
            y: s.position.y,
            z: s.position.z,
            vs: s.vertical_section,
            is_inflection: p.is_inflection,
            ti: p.single_ti,
            cumulative_ti: p.cumulative_ti,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Computed,
    NoInflection,
}

/// JSON report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub survey: String,
    pub field: String,
    pub rig: String,
    pub generated_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub frequency_corrected: bool,
    pub inflection_indices: Vec<usize>,
    pub final_tortuosity_index: Option<f64>,
    pub stations: Vec<StationRecord>,
}

impl SurveyReport {
    pub fn new(survey: &str, outcome: &SurveyOutcome, config: &AnalysisConfig) -> Self {
        let (status, inflection_indices) = match outcome {
            SurveyOutcome::Computed(report) => {
                (ReportStatus::Computed, report.inflection_indices.clone())
            }
            SurveyOutcome::NoInflection { .. } => (ReportStatus::NoInflection, Vec::new()),
        };
        Self {
            survey: survey.to_string(),
            field: config.survey.field.clone(),
            rig: config.survey.rig.clone(),
            generated_at: Utc::now(),
            status,
            frequency_corrected: config.analysis.apply_frequency_correction,
            inflection_indices,
            final_tortuosity_index: outcome.final_tortuosity_index(),
            stations: outcome.stations().iter().map(StationRecord::from).collect(),
        }
    }
}

// ============================================================================
// CSV
// ============================================================================

const CSV_HEADER: &str = "md,inc,azi,x,y,z,vs,is_inflection,ti,cumulative_ti";

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write per-station results as CSV.
///
/// The footer is only written when a cumulative series exists.
pub fn write_csv<W: Write>(
    mut writer: W,
    outcome: &SurveyOutcome,
    precision: usize,
) -> std::io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for r in outcome.stations().iter().map(StationRecord::from) {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{}",
            r.md,
            r.inc,
            r.azi,
            r.x,
            r.y,
            r.z,
            opt(r.vs),
            r.is_inflection,
            r.ti,
            opt(r.cumulative_ti)
        )?;
    }
    if let Some(ti) = outcome.final_tortuosity_index() {
        writeln!(writer)?;
        writeln!(writer, "Final Tortuosity Index: {ti:.precision$}")?;
    }
    writer.flush()
}

/// Per-station CSV as an in-memory string.
pub fn to_csv_string(outcome: &SurveyOutcome, precision: usize) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, outcome, precision)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

// ============================================================================
// File Export
// ============================================================================

/// Write `<dir>/<survey>_tortuosity.{csv,json}` and return the path.
pub fn export(
    dir: &Path,
    survey: &str,
    outcome: &SurveyOutcome,
    config: &AnalysisConfig,
    as_json: bool,
) -> Result<PathBuf, ReportError> {
    let extension = if as_json { "json" } else { "csv" };
    let path = dir.join(format!("{survey}_tortuosity.{extension}"));
    let io_err = |source| ReportError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    if as_json {
        serde_json::to_writer_pretty(&mut writer, &SurveyReport::new(survey, outcome, config))?;
        writer.flush().map_err(io_err)?;
    } else {
        write_csv(&mut writer, outcome, config.report.final_index_precision).map_err(io_err)?;
    }

    info!(path = %path.display(), "Report written");
    Ok(path)
}
