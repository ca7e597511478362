//! Survey frequency scaling factor
//!
//! Sparse surveys hide curvature between stations and dense surveys pick up
//! noise, so the cumulative index is corrected by average station spacing:
//!
//! - spacing < 30 ft: `0.3 / (0.3 + 0.025 × (30 - spacing))`
//! - spacing > 30 ft: `0.3 / (0.3 - (0.05/30) × (spacing - 30))`
//! - spacing = 30 ft: `1.0`
//!
//! The sparse branch denominator reaches zero at 210 ft; spacings at or past
//! that point raise `ScalingFactorDomain`.

use crate::config::ScalingConfig;
use crate::error::{Result, TortuosityError};
use crate::types::Station;

/// Scaling factor with the standard constants.
pub fn scaling_factor(avg_spacing: f64) -> Result<f64> {
    scaling_factor_with(&ScalingConfig::default(), avg_spacing)
}

/// Scaling factor for `avg_spacing` (ft) using the given constants.
pub fn scaling_factor_with(params: &ScalingConfig, avg_spacing: f64) -> Result<f64> {
    if !avg_spacing.is_finite() {
        return Err(TortuosityError::ScalingFactorDomain {
            avg_spacing,
            denominator: f64::NAN,
        });
    }

    let reference = params.reference_spacing_ft;
    if avg_spacing < reference {
        Ok(params.base / (params.base + params.dense_coefficient * (reference - avg_spacing)))
    } else if avg_spacing > reference {
        let denominator = params.base - params.sparse_coefficient * (avg_spacing - reference);
        if denominator <= 0.0 {
            return Err(TortuosityError::ScalingFactorDomain {
                avg_spacing,
                denominator,
            });
        }
        Ok(params.base / denominator)
    } else {
        Ok(1.0)
    }
}

/// Mean measured-depth delta between consecutive stations over
/// `[min_index, max_index]`.
///
/// Index clamping:
/// - `max_index` is used only when strictly between 1 and the last index,
///   otherwise the last index
/// - `min_index` is used only when strictly between 0 and the second-to-last
///   index, otherwise 0
pub fn average_spacing(
    stations: &[Station],
    min_index: Option<usize>,
    max_index: Option<usize>,
) -> Result<f64> {
    if stations.len() < 2 {
        return Err(TortuosityError::InvalidInput(format!(
            "Average spacing needs at least 2 stations, {} given",
            stations.len()
        )));
    }

    let last = stations.len() - 1;
    let second_to_last = last - 1;
    let max_index = match max_index {
        Some(m) if m > 1 && m < last => m,
        _ => last,
    };
    let min_index = match min_index {
        Some(m) if m > 0 && m < second_to_last => m,
        _ => 0,
    };

    if min_index >= max_index {
        return Err(TortuosityError::InvalidInput(format!(
            "Spacing range [{min_index}, {max_index}] holds no interval"
        )));
    }

    let deltas: Vec<f64> = stations[min_index..=max_index]
        .windows(2)
        .map(|pair| pair[1].measured_depth - pair[0].measured_depth)
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let count = deltas.len() as f64;
    Ok(deltas.iter().sum::<f64>() / count)
}
