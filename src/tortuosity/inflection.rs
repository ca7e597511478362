//! Inflection point classification
//!
//! A station is an inflection point when the wellbore's curvature reverses
//! on either angular channel, or when a perfectly straight run begins there.

use crate::error::{Result, TortuosityError};
use crate::geometry::angle_difference;
use crate::types::Station;

/// Why a station was classified as an inflection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflectionKind {
    /// Inclination build/drop reversed sign across the station
    InclinationReversal,
    /// Azimuth turn reversed sign across the station
    AzimuthReversal,
    /// Next station has identical inclination and azimuth
    StraightRunStart,
}

/// Classify the middle station of three consecutive stations.
///
/// Returns `None` when `st2` is not an inflection point. A zero delta on
/// either side (a plateau) is not a sign change; only a strictly negative
/// product counts. Position is never consulted.
pub fn inflection_kind(st1: &Station, st2: &Station, st3: &Station) -> Option<InflectionKind> {
    let d_inc_12 = angle_difference(st1.inclination, st2.inclination);
    let d_inc_23 = angle_difference(st2.inclination, st3.inclination);
    if d_inc_12 * d_inc_23 < 0.0 {
        return Some(InflectionKind::InclinationReversal);
    }

    let d_azi_12 = angle_difference(st1.azimuth, st2.azimuth);
    let d_azi_23 = angle_difference(st2.azimuth, st3.azimuth);
    if d_azi_12 * d_azi_23 < 0.0 {
        return Some(InflectionKind::AzimuthReversal);
    }

    if st2.equal_inc_azi(st3) {
        return Some(InflectionKind::StraightRunStart);
    }

    None
}

/// Decide whether the middle station of `stations` is an inflection point.
///
/// `stations` must hold exactly three stations ordered by depth.
pub fn is_inflection(stations: &[Station]) -> Result<bool> {
    let [st1, st2, st3] = stations else {
        return Err(TortuosityError::InvalidInput(format!(
            "Only 3 stations are accepted, {} given",
            stations.len()
        )));
    };
    Ok(inflection_kind(st1, st2, st3).is_some())
}
