//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `AnalysisConfig`.
///
/// Maintained by hand to match the struct hierarchy in analysis_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [survey]
        "survey",
        "survey.name",
        "survey.field",
        "survey.rig",
        // [analysis]
        "analysis",
        "analysis.apply_frequency_correction",
        "analysis.min_chord_length_ft",
        // [scaling]
        "scaling",
        "scaling.reference_spacing_ft",
        "scaling.base",
        "scaling.dense_coefficient",
        "scaling.sparse_coefficient",
        // [report]
        "report",
        "report.final_index_precision",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (k, levenshtein(unknown, k)))
        .filter(|&(_, dist)| dist <= 3)
        // Tie-break on the key itself so suggestions do not depend on hash order
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails: unparseable input yields no warnings and is reported by the
/// serde pass instead.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed `AnalysisConfig`.
///
/// Returns (errors, warnings). Errors are values that make the index
/// meaningless; warnings are suspicious but usable.
pub fn validate_physical_ranges(
    config: &super::AnalysisConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let s = &config.scaling;

    // Survey programs run between roughly 10 ft (gyro while drilling) and 200 ft
    if s.reference_spacing_ft > 0.0 && !(10.0..=200.0).contains(&s.reference_spacing_ft) {
        warnings.push(ValidationWarning {
            field: "scaling.reference_spacing_ft".to_string(),
            message: format!(
                "reference_spacing_ft = {:.1} is outside typical survey spacing (10-200 ft)",
                s.reference_spacing_ft
            ),
            suggestion: None,
        });
    }

    // Sparse branch must stay defined at least up to twice the reference spacing
    if let Some(limit) = s.sparse_limit_ft() {
        if limit.is_finite() && limit <= s.reference_spacing_ft * 2.0 {
            warnings.push(ValidationWarning {
                field: "scaling.sparse_coefficient".to_string(),
                message: format!(
                    "sparse_coefficient = {:.5} leaves no scaling factor above {:.1} ft spacing",
                    s.sparse_coefficient, limit
                ),
                suggestion: None,
            });
        }
    }

    // Chord threshold above a foot would reject legitimate short segments
    if config.analysis.min_chord_length_ft > 1.0 {
        warnings.push(ValidationWarning {
            field: "analysis.min_chord_length_ft".to_string(),
            message: format!(
                "min_chord_length_ft = {:.3} would flag ordinary short segments as degenerate",
                config.analysis.min_chord_length_ft
            ),
            suggestion: None,
        });
    }

    if config.report.final_index_precision > 12 {
        errors.push(format!(
            "report.final_index_precision = {} exceeds f64 precision (max 12)",
            config.report.final_index_precision
        ));
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
