//! Survey station types

use serde::{Deserialize, Serialize};

use crate::geometry::Point3;

/// One directional survey measurement along the wellbore.
///
/// Built once by ingestion and never mutated by the analysis; derived
/// fields live on [`ProcessedStation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Measured depth along the wellbore from surface (ft)
    pub measured_depth: f64,
    /// Angle from vertical (degrees)
    pub inclination: f64,
    /// Compass bearing (degrees, wraps at 360)
    pub azimuth: f64,
    /// Cartesian position from the survey computation
    pub position: Point3,
    /// Vertical section (ft) - carried through, not used in TI
    #[serde(default)]
    pub vertical_section: Option<f64>,
}

impl Station {
    pub const fn new(
        measured_depth: f64,
        inclination: f64,
        azimuth: f64,
        position: Point3,
    ) -> Self {
        Self {
            measured_depth,
            inclination,
            azimuth,
            position,
            vertical_section: None,
        }
    }

    #[must_use]
    pub const fn with_vertical_section(mut self, vertical_section: f64) -> Self {
        self.vertical_section = Some(vertical_section);
        self
    }

    /// Depth, direction and position are all finite numbers.
    pub fn is_finite(&self) -> bool {
        self.measured_depth.is_finite()
            && self.inclination.is_finite()
            && self.azimuth.is_finite()
            && self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.position.z.is_finite()
    }

    /// True when both stations point in exactly the same direction.
    ///
    /// Exact float comparison: survey tools report to fixed precision, so a
    /// repeated reading is bit-identical.
    #[allow(clippy::float_cmp)]
    pub fn equal_inc_azi(&self, other: &Self) -> bool {
        self.inclination == other.inclination && self.azimuth == other.azimuth
    }
}

/// A station after tortuosity analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedStation {
    pub station: Station,
    /// Curvature reversal or start of a straight run (endpoints always true
    /// once at least one interior inflection exists)
    pub is_inflection: bool,
    /// TI of the segment ending here, measured from the previous inflection
    /// point. Zero for non-inflection stations. Never negative.
    pub single_ti: f64,
    /// Running frequency-corrected TI; `None` when the survey had no
    /// interior inflection points
    pub cumulative_ti: Option<f64>,
}

impl ProcessedStation {
    pub const fn unclassified(station: Station) -> Self {
        Self {
            station,
            is_inflection: false,
            single_ti: 0.0,
            cumulative_ti: None,
        }
    }

    pub const fn measured_depth(&self) -> f64 {
        self.station.measured_depth
    }
}

/// Ordered station sequence for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Identifier used in logs and reports (usually the source file stem)
    pub name: String,
    pub stations: Vec<Station>,
}

impl Survey {
    pub fn new(name: impl Into<String>, stations: Vec<Station>) -> Self {
        Self {
            name: name.into(),
            stations,
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
