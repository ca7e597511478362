//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Survey Frequency Scaling
// ============================================================================

/// Station spacing at which the frequency correction is exactly 1.0 (ft).
pub const REFERENCE_SPACING_FT: f64 = 30.0;

/// Numerator and base term of both scaling branches.
pub const SCALING_BASE: f64 = 0.3;

/// Per-foot penalty applied when stations are denser than the reference.
pub const DENSE_COEFFICIENT: f64 = 0.025;

/// Per-foot boost applied when stations are sparser than the reference.
///
/// With the defaults the sparse denominator reaches zero at 210 ft spacing.
pub const SPARSE_COEFFICIENT: f64 = 0.05 / 30.0;

// ============================================================================
// Segment Geometry
// ============================================================================

/// Chord length at or below which two stations are treated as coincident (ft).
pub const MIN_CHORD_LENGTH_FT: f64 = 1e-9;

// ============================================================================
// Reporting
// ============================================================================

/// Decimal places of the final index in the CSV footer.
pub const FINAL_INDEX_PRECISION: usize = 2;

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TORTUOSITY_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "tortuosity.toml";
