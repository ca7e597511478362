//! Shared data structures for wellbore tortuosity analysis
//!
//! - Input: `Station` (one survey measurement), `Survey` (ordered sequence)
//! - Output: `ProcessedStation` (station plus derived TI fields),
//!   `SurveyOutcome` / `TortuosityReport` (terminal state of one run)

mod report;
mod station;

pub use report::*;
pub use station::*;
