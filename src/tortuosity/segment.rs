//! Single-segment tortuosity
//!
//! Formula: TI = |ΔMD / chord| - 1, floored at 0
//!
//! Where:
//! - ΔMD = measured depth between the two stations (ft)
//! - chord = straight-line distance between their positions (ft)
//!
//! A straight segment has ΔMD == chord and yields 0.

use crate::config::defaults::MIN_CHORD_LENGTH_FT;
use crate::error::{Result, TortuosityError};
use crate::geometry::distance;
use crate::types::Station;

/// Tortuosity of the path from `st1` to `st2` using the default chord threshold.
pub fn single_tortuosity(st1: &Station, st2: &Station) -> Result<f64> {
    single_tortuosity_with(st1, st2, MIN_CHORD_LENGTH_FT)
}

/// Tortuosity of the path from `st1` to `st2`.
///
/// Errors:
/// - `DepthOrder` if `st2` is shallower than `st1`
/// - `DegenerateGeometry` if the chord is not longer than `min_chord_ft`
/// - `DepthOrder` also when either depth is NaN, so the ratio below is
///   never NaN and the floor cannot hide it
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn single_tortuosity_with(st1: &Station, st2: &Station, min_chord_ft: f64) -> Result<f64> {
    if !(st2.measured_depth >= st1.measured_depth) {
        return Err(TortuosityError::DepthOrder {
            earlier_md: st1.measured_depth,
            later_md: st2.measured_depth,
        });
    }

    let chord = distance(st1.position, st2.position);
    // Negated comparison so a NaN chord is rejected too
    if !(chord > min_chord_ft) {
        return Err(TortuosityError::DegenerateGeometry {
            from_md: st1.measured_depth,
            to_md: st2.measured_depth,
            chord,
        });
    }

    let ti = ((st2.measured_depth - st1.measured_depth) / chord).abs() - 1.0;
    Ok(ti.max(0.0))
}
