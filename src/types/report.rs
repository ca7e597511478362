//! Analysis outcome types

use serde::{Deserialize, Serialize};

use super::ProcessedStation;

/// Result of a survey that contained at least one interior inflection point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TortuosityReport {
    /// Per-station results in survey order
    pub stations: Vec<ProcessedStation>,
    /// `[0] + interior inflections + [n-1]`
    pub inflection_indices: Vec<usize>,
    /// Last computed running TI
    pub final_tortuosity_index: f64,
}

impl TortuosityReport {
    /// Cumulative TI at each inflection point as `(measured_depth, ti)` pairs.
    pub fn inflection_profile(&self) -> Vec<(f64, f64)> {
        self.inflection_indices
            .iter()
            .filter_map(|&i| self.stations.get(i))
            .map(|s| (s.measured_depth(), s.cumulative_ti.unwrap_or(0.0)))
            .collect()
    }
}

/// Terminal state of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SurveyOutcome {
    /// Classification, segment and aggregation passes all ran
    Computed(TortuosityReport),
    /// No interior inflection point: insufficient geometric variation to
    /// analyze. Stations are returned classified but with no cumulative series.
    NoInflection { stations: Vec<ProcessedStation> },
}

impl SurveyOutcome {
    pub fn stations(&self) -> &[ProcessedStation] {
        match self {
            Self::Computed(report) => &report.stations,
            Self::NoInflection { stations } => stations,
        }
    }

    pub const fn final_tortuosity_index(&self) -> Option<f64> {
        match self {
            Self::Computed(report) => Some(report.final_tortuosity_index),
            Self::NoInflection { .. } => None,
        }
    }

    pub const fn report(&self) -> Option<&TortuosityReport> {
        match self {
            Self::Computed(report) => Some(report),
            Self::NoInflection { .. } => None,
        }
    }

    pub const fn is_no_inflection(&self) -> bool {
        matches!(self, Self::NoInflection { .. })
    }
}

impl std::fmt::Display for SurveyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Computed(report) => write!(
                f,
                "TI {:.2} over {} inflection points",
                report.final_tortuosity_index,
                report.inflection_indices.len()
            ),
            Self::NoInflection { stations } => {
                write!(f, "no inflection point in {} stations", stations.len())
            }
        }
    }
}
