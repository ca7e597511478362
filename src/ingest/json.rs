//! JSON survey parsing
//!
//! Accepts either a bare array of station objects or `{ "stations": [...] }`.
//! Positions use survey naming: `northing` → x, `easting` → y, `tvd` → z.

use serde::Deserialize;

use crate::geometry::Point3;
use crate::types::Station;

use super::{IngestError, Ingested, StationCollector};

#[derive(Debug, Deserialize)]
struct JsonStation {
    measured_depth: f64,
    inclination: f64,
    azimuth: f64,
    northing: f64,
    easting: f64,
    tvd: f64,
    #[serde(default)]
    vertical_section: Option<f64>,
}

impl From<JsonStation> for Station {
    fn from(s: JsonStation) -> Self {
        Self {
            measured_depth: s.measured_depth,
            inclination: s.inclination,
            azimuth: s.azimuth,
            position: Point3::new(s.northing, s.easting, s.tvd),
            vertical_section: s.vertical_section,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSurvey {
    List(Vec<JsonStation>),
    Wrapped { stations: Vec<JsonStation> },
}

/// Parse JSON survey text.
pub fn parse_json(name: &str, contents: &str) -> Result<Ingested, IngestError> {
    let records = match serde_json::from_str::<JsonSurvey>(contents)? {
        JsonSurvey::List(records) | JsonSurvey::Wrapped { stations: records } => records,
    };

    let mut collector = StationCollector::default();
    for record in records {
        collector.push(record.into());
    }
    collector.finish(name)
}
