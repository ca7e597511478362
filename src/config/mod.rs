//! Analysis Configuration Module
//!
//! Per-survey configuration loaded from TOML files. Every constant of the
//! tortuosity formulas that an engineer may want to tune lives here, with
//! defaults that reproduce the published index exactly.
//!
//! ## Loading Order
//!
//! 1. `TORTUOSITY_CONFIG` environment variable (path to TOML file)
//! 2. `tortuosity.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! ```ignore
//! let config = AnalysisConfig::load();
//! let outcome = tortuosity::process(&survey.stations, &config)?;
//! ```

mod analysis_config;
pub mod defaults;
pub mod validation;

pub use analysis_config::*;
