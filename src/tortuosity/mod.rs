//! Tortuosity Engine Module
//!
//! Deterministic geometry for wellbore tortuosity. No I/O happens here.
//!
//! ## Building Blocks
//! - `is_inflection()` - curvature reversal / straight-run test on a triplet
//! - `single_tortuosity()` - MD-to-chord excess of one segment
//! - `scaling_factor()` / `average_spacing()` - survey frequency correction
//!
//! ## Pipeline
//! - `process()` - classification, segment and aggregation passes over one survey
//! - `analyze_batch()` - many surveys in parallel

pub mod batch;
pub mod inflection;
pub mod pipeline;
pub mod scaling;
pub mod segment;

pub use batch::{analyze_batch, analyze_survey};
pub use inflection::{inflection_kind, is_inflection, InflectionKind};
pub use pipeline::{classify, cumulative_tortuosity, process, segment_tortuosity, Classification};
pub use scaling::{average_spacing, scaling_factor, scaling_factor_with};
pub use segment::{single_tortuosity, single_tortuosity_with};
