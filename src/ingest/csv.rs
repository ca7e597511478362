//! CSV survey parsing
//!
//! Header names are matched case-insensitively against common aliases, so
//! exports from most survey management tools load without remapping:
//!
//! | Field            | Accepted headers                          |
//! |------------------|-------------------------------------------|
//! | measured depth   | `md`, `measured_depth`, `measured depth`  |
//! | inclination      | `inc`, `inclination`                      |
//! | azimuth          | `azi`, `azimuth`                          |
//! | x (northing)     | `northing`, `x`, `ns`, `n/s`              |
//! | y (easting)      | `easting`, `y`, `ew`, `e/w`               |
//! | z (TVD)          | `tvd`, `z`                                |
//! | vertical section | `vs`, `vertical_section`, `vertical section` |
//!
//! A trailing unit in parentheses (`MD (ft)`) is ignored.

use tracing::warn;

use crate::geometry::Point3;
use crate::types::Station;

use super::{IngestError, Ingested, StationCollector};

// ============================================================================
// CSV Quote-Aware Parsing
// ============================================================================

/// Split a CSV line respecting quoted fields (handles commas inside quotes).
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

// ============================================================================
// Column Mapping
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
struct ColumnMap {
    md: Option<usize>,
    inc: Option<usize>,
    azi: Option<usize>,
    x: Option<usize>,
    y: Option<usize>,
    z: Option<usize>,
    vs: Option<usize>,
}

/// Resolved indices of the required columns.
#[derive(Debug, Clone, Copy)]
struct RequiredColumns {
    md: usize,
    inc: usize,
    azi: usize,
    x: usize,
    y: usize,
    z: usize,
    vs: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &str) -> Self {
        let mut map = Self::default();
        for (idx, raw) in csv_split(header).iter().enumerate() {
            let name = normalize_header(raw);
            let slot = match name.as_str() {
                "md" | "measured_depth" | "measured depth" | "depth" => &mut map.md,
                "inc" | "incl" | "inclination" => &mut map.inc,
                "azi" | "azm" | "azimuth" => &mut map.azi,
                "northing" | "x" | "ns" | "n/s" | "north" => &mut map.x,
                "easting" | "y" | "ew" | "e/w" | "east" => &mut map.y,
                "tvd" | "z" => &mut map.z,
                "vs" | "vertical_section" | "vertical section" => &mut map.vs,
                _ => continue,
            };
            // First matching column wins
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        map
    }

    fn require(self) -> Result<RequiredColumns, IngestError> {
        Ok(RequiredColumns {
            md: self.md.ok_or(IngestError::MissingColumn("measured_depth"))?,
            inc: self.inc.ok_or(IngestError::MissingColumn("inclination"))?,
            azi: self.azi.ok_or(IngestError::MissingColumn("azimuth"))?,
            x: self.x.ok_or(IngestError::MissingColumn("northing"))?,
            y: self.y.ok_or(IngestError::MissingColumn("easting"))?,
            z: self.z.ok_or(IngestError::MissingColumn("tvd"))?,
            vs: self.vs,
        })
    }
}

/// Lowercase, trim, strip a trailing `(unit)` and any BOM.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('\u{feff}');
    let without_unit = match trimmed.find('(') {
        Some(pos) if trimmed.ends_with(')') => &trimmed[..pos],
        _ => trimmed,
    };
    without_unit.trim().to_lowercase()
}

fn parse_field(fields: &[String], idx: usize) -> Option<f64> {
    let value: f64 = fields.get(idx)?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

impl RequiredColumns {
    fn station(&self, fields: &[String]) -> Option<Station> {
        let station = Station::new(
            parse_field(fields, self.md)?,
            parse_field(fields, self.inc)?,
            parse_field(fields, self.azi)?,
            Point3::new(
                parse_field(fields, self.x)?,
                parse_field(fields, self.y)?,
                parse_field(fields, self.z)?,
            ),
        );
        Some(match self.vs.and_then(|idx| parse_field(fields, idx)) {
            Some(vs) => station.with_vertical_section(vs),
            None => station,
        })
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Parse CSV survey text with a header row.
pub fn parse_csv(name: &str, contents: &str) -> Result<Ingested, IngestError> {
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());
    let header = lines.next().ok_or(IngestError::EmptyInput)?;
    let columns = ColumnMap::from_header(header).require()?;

    let mut collector = StationCollector::default();
    for (row, line) in lines.enumerate() {
        let fields = csv_split(line);
        match columns.station(&fields) {
            Some(station) => collector.push(station),
            None => {
                // +2: one for the header, one for 1-based numbering
                warn!(
                    survey = name,
                    row = row + 2,
                    "Skipping survey row with missing or invalid values"
                );
                collector.skip();
            }
        }
    }

    collector.finish(name)
}
