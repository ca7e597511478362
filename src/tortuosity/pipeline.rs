//! Tortuosity pipeline
//!
//! One run walks the survey through three passes:
//!
//! 1. Classification - every interior station is tested against its
//!    neighbours; surveys with no interior inflection stop here
//! 2. Segment - each inflection point gets the TI of the path since the
//!    previous inflection point
//! 3. Aggregation - a forward scan folds flags, segment TIs and spacing into
//!    the running frequency-corrected index
//!
//! Cumulative TI at inflection point j:
//!
//! `TI_j = f_SF × Lc² × ((n - 1) / n) × (1 / Lc) × Σ ti`
//!
//! Where:
//! - n = inflection points in [0, j] minus one (intervals from surface)
//! - Lc = MD_j - MD_0
//! - Σ ti = sum of segment TIs in [0, j]
//! - f_SF = scaling factor for the average spacing over [0, j]

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{Result, TortuosityError};
use crate::types::{ProcessedStation, Station, SurveyOutcome, TortuosityReport};

use super::inflection::inflection_kind;
use super::scaling::{average_spacing, scaling_factor_with};
use super::segment::single_tortuosity_with;

/// Output of the classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Inflection flag per station (endpoints not yet forced)
    pub flags: Vec<bool>,
    /// Interior inflection indices in ascending order
    pub interior: Vec<usize>,
}

impl Classification {
    pub fn has_inflections(&self) -> bool {
        !self.interior.is_empty()
    }

    /// `[0] + interior + [n-1]`
    pub fn inflection_indices(&self) -> Vec<usize> {
        let last = self.flags.len().saturating_sub(1);
        let mut indices = Vec::with_capacity(self.interior.len() + 2);
        indices.push(0);
        indices.extend(self.interior.iter().copied().filter(|&i| i != 0 && i != last));
        if last != 0 {
            indices.push(last);
        }
        indices
    }
}

/// Classify every interior station of the survey.
pub fn classify(stations: &[Station]) -> Classification {
    let mut flags = vec![false; stations.len()];
    let mut interior = Vec::new();

    for (offset, triplet) in stations.windows(3).enumerate() {
        let idx = offset + 1;
        if let Some(kind) = inflection_kind(&triplet[0], &triplet[1], &triplet[2]) {
            debug!(index = idx, md = triplet[1].measured_depth, ?kind, "Inflection point");
            flags[idx] = true;
            interior.push(idx);
        }
    }

    Classification { flags, interior }
}

/// Segment TI at each inflection point, measured from the previous one.
///
/// Returns one value per station; stations that are not inflection points
/// carry 0.
pub fn segment_tortuosity(
    stations: &[Station],
    inflection_indices: &[usize],
    min_chord_ft: f64,
) -> Result<Vec<f64>> {
    let mut single_ti = vec![0.0; stations.len()];
    for pair in inflection_indices.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        single_ti[to] = single_tortuosity_with(&stations[from], &stations[to], min_chord_ft)?;
    }
    Ok(single_ti)
}

/// Running cumulative TI for every station.
///
/// Non-inflection stations inherit the last computed value. The running
/// value is left unchanged at inflection points with fewer than one interval
/// from surface or a non-positive TI sum.
pub fn cumulative_tortuosity(
    stations: &[Station],
    flags: &[bool],
    single_ti: &[f64],
    config: &AnalysisConfig,
) -> Result<Vec<f64>> {
    if flags.len() != stations.len() || single_ti.len() != stations.len() {
        return Err(TortuosityError::InvalidInput(format!(
            "Expected one flag and one segment TI per station ({} stations, {} flags, {} TIs)",
            stations.len(),
            flags.len(),
            single_ti.len()
        )));
    }
    let Some(surface) = stations.first() else {
        return Ok(Vec::new());
    };

    let mut running = 0.0;
    let mut inflections_seen = 0_usize;
    let mut ti_sum = 0.0;
    let mut cumulative = Vec::with_capacity(stations.len());

    for (j, station) in stations.iter().enumerate() {
        ti_sum += single_ti[j];

        if flags[j] {
            inflections_seen += 1;
            let n_inflect = inflections_seen - 1;

            if n_inflect >= 1 && ti_sum > 0.0 {
                let lc = station.measured_depth - surface.measured_depth;
                let f_sf = if config.analysis.apply_frequency_correction {
                    let spacing = average_spacing(stations, None, Some(j))?;
                    scaling_factor_with(&config.scaling, spacing)?
                } else {
                    1.0
                };
                #[allow(clippy::cast_precision_loss)]
                let n = n_inflect as f64;
                running = f_sf * lc.powi(2) * ((n - 1.0) / n) * (1.0 / lc) * ti_sum;
                debug!(md = station.measured_depth, ti = running, f_sf, "Tortuosity Index");
            }
        }

        cumulative.push(running);
    }

    Ok(cumulative)
}

/// Run the full pipeline over an ordered station sequence.
///
/// The input is never mutated; every derived field lands on a fresh
/// [`ProcessedStation`]. Stations must be finite and strictly increasing in
/// measured depth.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn process(stations: &[Station], config: &AnalysisConfig) -> Result<SurveyOutcome> {
    if stations.is_empty() {
        return Err(TortuosityError::EmptySurvey);
    }
    if let Some((i, station)) = stations.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(TortuosityError::InvalidInput(format!(
            "Station {i} at {} ft has a non-finite depth, direction or position",
            station.measured_depth
        )));
    }
    // Negated comparison so a NaN depth can never pass as increasing
    if let Some(pair) = stations
        .windows(2)
        .find(|pair| !(pair[1].measured_depth > pair[0].measured_depth))
    {
        return Err(TortuosityError::DepthOrder {
            earlier_md: pair[0].measured_depth,
            later_md: pair[1].measured_depth,
        });
    }

    let classification = classify(stations);

    if !classification.has_inflections() {
        let processed = stations
            .iter()
            .zip(&classification.flags)
            .map(|(station, &is_inflection)| ProcessedStation {
                is_inflection,
                ..ProcessedStation::unclassified(station.clone())
            })
            .collect();
        return Ok(SurveyOutcome::NoInflection { stations: processed });
    }

    let inflection_indices = classification.inflection_indices();
    debug!(indices = ?inflection_indices, "Inflection points indices");

    let mut flags = classification.flags;
    for &i in &inflection_indices {
        flags[i] = true;
    }

    let single_ti = segment_tortuosity(
        stations,
        &inflection_indices,
        config.analysis.min_chord_length_ft,
    )?;
    let cumulative = cumulative_tortuosity(stations, &flags, &single_ti, config)?;
    let final_tortuosity_index = cumulative.last().copied().unwrap_or(0.0);

    let processed = stations
        .iter()
        .enumerate()
        .map(|(i, station)| ProcessedStation {
            station: station.clone(),
            is_inflection: flags[i],
            single_ti: single_ti[i],
            cumulative_ti: Some(cumulative[i]),
        })
        .collect();

    Ok(SurveyOutcome::Computed(TortuosityReport {
        stations: processed,
        inflection_indices,
        final_tortuosity_index,
    }))
}
