//! Multi-survey analysis
//!
//! Surveys share no state, so independent runs go straight onto the rayon
//! pool. Results come back in input order.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::types::{Survey, SurveyOutcome};

use super::pipeline::process;

/// Analyze one named survey, logging its outcome.
pub fn analyze_survey(survey: &Survey, config: &AnalysisConfig) -> Result<SurveyOutcome> {
    let outcome = process(&survey.stations, config);
    match &outcome {
        Ok(SurveyOutcome::Computed(report)) => info!(
            survey = %survey.name,
            stations = survey.len(),
            inflections = report.inflection_indices.len(),
            ti = report.final_tortuosity_index,
            "Tortuosity computed"
        ),
        Ok(SurveyOutcome::NoInflection { .. }) => warn!(
            survey = %survey.name,
            stations = survey.len(),
            "No inflection point: insufficient geometric variation to analyze"
        ),
        Err(e) => warn!(survey = %survey.name, error = %e, "Tortuosity analysis failed"),
    }
    outcome
}

/// Analyze many surveys in parallel.
pub fn analyze_batch(surveys: &[Survey], config: &AnalysisConfig) -> Vec<Result<SurveyOutcome>> {
    surveys
        .par_iter()
        .map(|survey| analyze_survey(survey, config))
        .collect()
}
