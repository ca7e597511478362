//! Tortuosity Index: Wellbore Path Waviness from Directional Surveys
//!
//! Detects inflection points along a surveyed trajectory and computes the
//! frequency-corrected cumulative Tortuosity Index (TI).
//!
//! ## Architecture
//!
//! - **Geometry**: 3D chord distance and signed bearing differences
//! - **Tortuosity Engine**: inflection classifier, segment TI, survey
//!   frequency scaling, and the pipeline that folds them into the index
//! - **Ingestion / Report**: CSV and JSON surveys in, per-station results out
//! - **Config**: TOML-tunable constants with validation

pub mod config;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod report;
pub mod tortuosity;
pub mod types;

// Re-export configuration
pub use config::AnalysisConfig;

// Re-export commonly used types
pub use error::TortuosityError;
pub use geometry::{angle_difference, distance, Point3};
pub use types::{ProcessedStation, Station, Survey, SurveyOutcome, TortuosityReport};

// Re-export the engine entry points
pub use tortuosity::{
    analyze_batch, is_inflection, process, scaling_factor, single_tortuosity,
};
