//! Error taxonomy for the tortuosity computation.
//!
//! Every variant is fatal to the call that produced it. The computation is
//! deterministic, so nothing here is retried.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TortuosityError {
    /// Classifier invoked with something other than a station triplet, or a
    /// depth range too short to average.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Survey contains no stations")]
    EmptySurvey,

    #[error("Depth order violated: {later_md:.2} ft follows {earlier_md:.2} ft")]
    DepthOrder { earlier_md: f64, later_md: f64 },

    /// Zero-length chord between two stations; the MD/chord ratio is undefined.
    #[error("Degenerate geometry: chord {chord:.3e} ft between {from_md:.2} and {to_md:.2} ft")]
    DegenerateGeometry { from_md: f64, to_md: f64, chord: f64 },

    /// Average spacing drives the sparse-survey denominator to zero or below.
    #[error("No scaling factor for {avg_spacing:.2} ft spacing (denominator {denominator:.4})")]
    ScalingFactorDomain { avg_spacing: f64, denominator: f64 },
}

pub type Result<T> = std::result::Result<T, TortuosityError>;
