//! Analysis Configuration - tortuosity constants as operator-tunable TOML values
//!
//! Each struct implements `Default` with the published constants, so a
//! missing config file changes nothing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a tortuosity analysis run.
///
/// Load with `AnalysisConfig::load()` which searches:
/// 1. `$TORTUOSITY_CONFIG` env var
/// 2. `./tortuosity.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Survey identification
    #[serde(default)]
    pub survey: SurveyInfo,

    /// Pipeline switches
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Survey frequency scaling factor constants
    #[serde(default)]
    pub scaling: ScalingConfig,

    /// Output formatting
    #[serde(default)]
    pub report: ReportConfig,
}

impl AnalysisConfig {
    /// Load configuration using the standard search order:
    /// 1. `$TORTUOSITY_CONFIG` environment variable
    /// 2. `./tortuosity.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(
                            path = %p.display(),
                            survey = %config.survey.name,
                            "Loaded config from TORTUOSITY_CONFIG"
                        );
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            path = %p.display(),
                            error = %e,
                            "Failed to load config from TORTUOSITY_CONFIG, falling back"
                        );
                    }
                }
            } else {
                warn!(path = %path, "TORTUOSITY_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./tortuosity.toml
        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(survey = %config.survey.name, "Loaded config from ./tortuosity.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./tortuosity.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No tortuosity.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings, never rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in &super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Write the config to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))
    }

    /// Validate internal consistency.
    ///
    /// Checks:
    /// - Every float is finite
    /// - Scaling reference spacing and base are positive
    /// - Scaling coefficients and the chord threshold are non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                errors.push(format!("{name} must be a finite number (got {value})"));
            }
        }

        let s = &self.scaling;
        if s.reference_spacing_ft <= 0.0 {
            errors.push(format!(
                "scaling.reference_spacing_ft ({:.2}) must be > 0",
                s.reference_spacing_ft
            ));
        }
        if s.base <= 0.0 {
            errors.push(format!("scaling.base ({:.3}) must be > 0", s.base));
        }
        if s.dense_coefficient < 0.0 {
            errors.push(format!(
                "scaling.dense_coefficient ({:.4}) cannot be negative",
                s.dense_coefficient
            ));
        }
        if s.sparse_coefficient < 0.0 {
            errors.push(format!(
                "scaling.sparse_coefficient ({:.4}) cannot be negative",
                s.sparse_coefficient
            ));
        }
        if self.analysis.min_chord_length_ft < 0.0 {
            errors.push(format!(
                "analysis.min_chord_length_ft ({:e}) cannot be negative",
                self.analysis.min_chord_length_ft
            ));
        }

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn float_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("analysis.min_chord_length_ft", self.analysis.min_chord_length_ft),
            ("scaling.reference_spacing_ft", self.scaling.reference_spacing_ft),
            ("scaling.base", self.scaling.base),
            ("scaling.dense_coefficient", self.scaling.dense_coefficient),
            ("scaling.sparse_coefficient", self.scaling.sparse_coefficient),
        ]
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            Self::Serialize(e) => write!(f, "Config serialization error: {e}"),
            Self::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Survey Info
// ============================================================================

/// Identification metadata - not used for logic, but appears in logs and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyInfo {
    #[serde(default = "default_survey_name")]
    pub name: String,

    #[serde(default)]
    pub field: String,

    #[serde(default)]
    pub rig: String,
}

fn default_survey_name() -> String {
    "Unnamed Survey".to_string()
}

impl Default for SurveyInfo {
    fn default() -> Self {
        Self {
            name: default_survey_name(),
            field: String::new(),
            rig: String::new(),
        }
    }
}

// ============================================================================
// Analysis Settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Apply the survey frequency scaling factor to the cumulative TI.
    /// When false, `f_SF` is fixed at 1.0 (uncorrected index).
    #[serde(default = "default_apply_frequency_correction")]
    pub apply_frequency_correction: bool,

    /// Chords at or below this length (ft) raise `DegenerateGeometry`.
    #[serde(default = "default_min_chord_length")]
    pub min_chord_length_ft: f64,
}

const fn default_apply_frequency_correction() -> bool { true }
const fn default_min_chord_length() -> f64 { defaults::MIN_CHORD_LENGTH_FT }

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            apply_frequency_correction: default_apply_frequency_correction(),
            min_chord_length_ft: default_min_chord_length(),
        }
    }
}

// ============================================================================
// Scaling Config
// ============================================================================

/// Constants of the piecewise survey frequency correction.
///
/// - spacing < reference: `base / (base + dense * (reference - spacing))`
/// - spacing > reference: `base / (base - sparse * (spacing - reference))`
/// - spacing == reference: `1.0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Spacing (ft) at which the factor is 1.0.
    #[serde(default = "default_reference_spacing")]
    pub reference_spacing_ft: f64,

    #[serde(default = "default_scaling_base")]
    pub base: f64,

    /// Per-foot coefficient for surveys denser than the reference.
    #[serde(default = "default_dense_coefficient")]
    pub dense_coefficient: f64,

    /// Per-foot coefficient for surveys sparser than the reference.
    #[serde(default = "default_sparse_coefficient")]
    pub sparse_coefficient: f64,
}

const fn default_reference_spacing() -> f64 { defaults::REFERENCE_SPACING_FT }
const fn default_scaling_base() -> f64 { defaults::SCALING_BASE }
const fn default_dense_coefficient() -> f64 { defaults::DENSE_COEFFICIENT }
const fn default_sparse_coefficient() -> f64 { defaults::SPARSE_COEFFICIENT }

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            reference_spacing_ft: default_reference_spacing(),
            base: default_scaling_base(),
            dense_coefficient: default_dense_coefficient(),
            sparse_coefficient: default_sparse_coefficient(),
        }
    }
}

impl ScalingConfig {
    /// Average spacing (ft) at which the sparse denominator reaches zero.
    ///
    /// `None` when the sparse coefficient is zero (denominator never vanishes).
    pub fn sparse_limit_ft(&self) -> Option<f64> {
        (self.sparse_coefficient > 0.0)
            .then(|| self.reference_spacing_ft + self.base / self.sparse_coefficient)
    }
}

// ============================================================================
// Report Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for the final index footer in CSV output.
    #[serde(default = "default_final_index_precision")]
    pub final_index_precision: usize,
}

const fn default_final_index_precision() -> usize { defaults::FINAL_INDEX_PRECISION }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            final_index_precision: default_final_index_precision(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
