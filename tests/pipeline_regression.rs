//! Pipeline Regression Tests
//!
//! Exercises the full tortuosity pipeline on synthetic laterals whose
//! positions are integrated from (MD, inclination, azimuth) with the
//! balanced tangential method, so chords and measured depth stay physically
//! consistent. Asserts on endpoint flags, carry-forward of the running
//! index, frame invariance and idempotence.

use tortuosity_index::config::AnalysisConfig;
use tortuosity_index::geometry::Point3;
use tortuosity_index::tortuosity::{classify, process};
use tortuosity_index::types::{Station, SurveyOutcome};
use tortuosity_index::TortuosityError;

/// Integrate positions for a list of (md, inc, azi) tuples.
fn build_survey(directional: &[(f64, f64, f64)], start: Point3) -> Vec<Station> {
    let mut stations = Vec::with_capacity(directional.len());
    let mut pos = start;
    for (i, &(md, inc, azi)) in directional.iter().enumerate() {
        if i > 0 {
            let (md0, inc0, azi0) = directional[i - 1];
            let half = (md - md0) / 2.0;
            let (i0, a0) = (inc0.to_radians(), azi0.to_radians());
            let (i1, a1) = (inc.to_radians(), azi.to_radians());
            pos = Point3::new(
                pos.x + half * (i0.sin() * a0.cos() + i1.sin() * a1.cos()),
                pos.y + half * (i0.sin() * a0.sin() + i1.sin() * a1.sin()),
                pos.z + half * (i0.cos() + i1.cos()),
            );
        }
        stations.push(Station::new(md, inc, azi, pos));
    }
    stations
}

/// Horizontal lateral with sinusoidal inclination and azimuth wander.
fn wavy_lateral(inc_amplitude: f64, azi_amplitude: f64, spacing: f64, count: u32) -> Vec<Station> {
    let directional: Vec<(f64, f64, f64)> = (0..count)
        .map(|i| {
            let md = 8000.0 + f64::from(i) * spacing;
            let inc = 90.0 + inc_amplitude * (md * std::f64::consts::TAU / 600.0).sin();
            let azi = 180.0 + azi_amplitude * (md * std::f64::consts::TAU / 900.0).sin();
            (md, inc, azi)
        })
        .collect();
    build_survey(&directional, Point3::new(0.0, 0.0, 7500.0))
}

fn computed(outcome: SurveyOutcome) -> tortuosity_index::TortuosityReport {
    match outcome {
        SurveyOutcome::Computed(report) => report,
        SurveyOutcome::NoInflection { .. } => panic!("Expected a computed report"),
    }
}

#[test]
fn wavy_lateral_produces_positive_index() {
    let stations = wavy_lateral(2.0, 3.0, 30.0, 60);
    let report = computed(process(&stations, &AnalysisConfig::default()).unwrap());

    assert!(report.final_tortuosity_index > 0.0);
    assert!(report.final_tortuosity_index.is_finite());
    assert_eq!(report.inflection_indices.first(), Some(&0));
    assert_eq!(report.inflection_indices.last(), Some(&59));
    assert!(report.stations[0].is_inflection);
    assert!(report.stations[59].is_inflection);
    assert_eq!(
        report.stations[59].cumulative_ti,
        Some(report.final_tortuosity_index)
    );
}

#[test]
fn every_station_carries_a_cumulative_value() {
    let stations = wavy_lateral(2.0, 3.0, 30.0, 60);
    let report = computed(process(&stations, &AnalysisConfig::default()).unwrap());

    let mut last = 0.0;
    for (i, s) in report.stations.iter().enumerate() {
        let value = s.cumulative_ti.expect("cumulative value on every station");
        if !s.is_inflection {
            assert_eq!(value, last, "Station {i} should inherit the running value");
            assert_eq!(s.single_ti, 0.0, "Only inflection points carry a segment TI");
        }
        assert!(s.single_ti >= 0.0);
        last = value;
    }
}

#[test]
fn uniform_spacing_index_never_decreases() {
    // f_SF is 1.0 everywhere, and Lc, (n-1)/n and the TI sum only grow
    let stations = wavy_lateral(2.0, 3.0, 30.0, 60);
    let report = computed(process(&stations, &AnalysisConfig::default()).unwrap());
    let values: Vec<f64> = report.inflection_profile().into_iter().map(|(_, ti)| ti).collect();
    assert!(values.windows(2).all(|w| w[1] >= w[0]), "Profile decreased: {:?}", values);
}

#[test]
fn wavier_well_scores_higher() {
    let config = AnalysisConfig::default();
    let gentle = computed(process(&wavy_lateral(0.5, 0.5, 30.0, 60), &config).unwrap());
    let rough = computed(process(&wavy_lateral(4.0, 6.0, 30.0, 60), &config).unwrap());
    assert!(
        rough.final_tortuosity_index > gentle.final_tortuosity_index,
        "rough {} should exceed gentle {}",
        rough.final_tortuosity_index,
        gentle.final_tortuosity_index
    );
}

#[test]
fn index_is_invariant_to_frame_rotation_and_translation() {
    let stations = wavy_lateral(2.0, 3.0, 30.0, 40);
    let theta: f64 = 37.0;
    let (sin, cos) = theta.to_radians().sin_cos();
    let rotated: Vec<Station> = stations
        .iter()
        .map(|s| {
            let p = s.position;
            Station::new(
                s.measured_depth,
                s.inclination,
                s.azimuth,
                Point3::new(p.x * cos - p.y * sin + 1.0e5, p.x * sin + p.y * cos - 2.5e4, p.z),
            )
        })
        .collect();

    let config = AnalysisConfig::default();
    let a = computed(process(&stations, &config).unwrap());
    let b = computed(process(&rotated, &config).unwrap());

    assert_eq!(classify(&stations), classify(&rotated));
    assert_eq!(a.inflection_indices, b.inflection_indices);
    let tolerance = 1e-6 * a.final_tortuosity_index.abs().max(1.0);
    assert!((a.final_tortuosity_index - b.final_tortuosity_index).abs() < tolerance);
}

#[test]
fn repeated_runs_are_identical() {
    let stations = wavy_lateral(2.0, 3.0, 30.0, 60);
    let copy = stations.clone();
    let config = AnalysisConfig::default();
    assert_eq!(process(&stations, &config), process(&copy, &config));
}

#[test]
fn dense_survey_is_down_weighted_against_raw_index() {
    let stations = wavy_lateral(2.0, 3.0, 15.0, 120);
    let corrected = process(&stations, &AnalysisConfig::default()).unwrap();

    let mut raw_config = AnalysisConfig::default();
    raw_config.analysis.apply_frequency_correction = false;
    let raw = process(&stations, &raw_config).unwrap();

    let corrected = corrected.final_tortuosity_index().unwrap();
    let raw = raw.final_tortuosity_index().unwrap();
    let expected = raw * 0.3 / (0.3 + 0.025 * 15.0);
    assert!((corrected - expected).abs() < 1e-9 * raw.max(1.0));
}

#[test]
fn survey_sparser_than_scaling_limit_is_rejected() {
    let stations = wavy_lateral(2.0, 3.0, 250.0, 20);
    assert!(matches!(
        process(&stations, &AnalysisConfig::default()),
        Err(TortuosityError::ScalingFactorDomain { .. })
    ));
}

#[test]
fn tangent_section_reports_no_inflection() {
    // Steady build: inclination always increasing, azimuth always turning right
    let directional: Vec<(f64, f64, f64)> = (0..20)
        .map(|i| {
            let i = f64::from(i);
            (3000.0 + i * 30.0, 10.0 + i * 1.5, 40.0 + i * 0.5)
        })
        .collect();
    let stations = build_survey(&directional, Point3::new(0.0, 0.0, 2990.0));

    let outcome = process(&stations, &AnalysisConfig::default()).unwrap();
    assert!(outcome.is_no_inflection());
    assert_eq!(outcome.final_tortuosity_index(), None);
    assert_eq!(outcome.stations().len(), 20);
}

/// Scaling factor with the standard constants, written out longhand.
fn expected_scaling(spacing: f64) -> f64 {
    if spacing < 30.0 {
        0.3 / (0.3 + 0.025 * (30.0 - spacing))
    } else if spacing > 30.0 {
        0.3 / (0.3 - (0.05 / 30.0) * (spacing - 30.0))
    } else {
        1.0
    }
}

#[test]
fn uneven_spacing_scales_each_inflection_by_its_own_depth_range() {
    // Three 20 ft stations, then 40 ft stations. Inclination alternates, so
    // every interior station is an inflection point.
    let directional = [
        (0.0, 88.0, 180.0),
        (20.0, 91.0, 180.0),
        (40.0, 89.0, 180.0),
        (60.0, 92.0, 180.0),
        (100.0, 88.0, 180.0),
        (140.0, 91.0, 180.0),
        (180.0, 89.0, 180.0),
        (220.0, 90.0, 180.0),
    ];
    let stations = build_survey(&directional, Point3::new(0.0, 0.0, 0.0));
    let report = computed(process(&stations, &AnalysisConfig::default()).unwrap());
    assert_eq!(report.inflection_indices, (0..8).collect::<Vec<_>>());

    let last = stations.len() - 1;
    #[allow(clippy::cast_precision_loss)]
    let whole_survey = 220.0 / last as f64;
    let mut ti_sum = 0.0;
    for (j, s) in report.stations.iter().enumerate() {
        ti_sum += s.single_ti;
        if j == 0 {
            assert_eq!(s.cumulative_ti, Some(0.0));
            continue;
        }
        // Spacing averaged over [0, j]; j == 1 falls back to the whole survey
        #[allow(clippy::cast_precision_loss)]
        let spacing = if j == 1 { whole_survey } else { directional[j].0 / j as f64 };
        #[allow(clippy::cast_precision_loss)]
        let n = j as f64;
        let lc = directional[j].0;
        let expected =
            expected_scaling(spacing) * lc.powi(2) * ((n - 1.0) / n) * (1.0 / lc) * ti_sum;

        let actual = s.cumulative_ti.expect("cumulative value");
        assert!(
            (actual - expected).abs() < 1e-9 * expected.abs().max(1e-6),
            "Station {j}: expected {expected}, got {actual}"
        );
    }

    // The dense prefix is scaled differently from the survey as a whole
    assert!((expected_scaling(20.0) - expected_scaling(whole_survey)).abs() > 0.1);
}

#[test]
fn first_inflection_uses_whole_survey_spacing() {
    // Closely spaced start, then one long gap that pushes the survey-wide
    // average past the sparse limit. Only the survey-wide average can fail at j == 1.
    let directional = [
        (0.0, 88.0, 180.0),
        (30.0, 91.0, 180.0),
        (60.0, 89.0, 180.0),
        (2000.0, 92.0, 180.0),
    ];
    let stations = build_survey(&directional, Point3::new(0.0, 0.0, 0.0));
    match process(&stations, &AnalysisConfig::default()) {
        Err(TortuosityError::ScalingFactorDomain { avg_spacing, .. }) => {
            assert!((avg_spacing - 2000.0 / 3.0).abs() < 1e-9, "got {avg_spacing}");
        }
        other => panic!("Expected a scaling domain error, got {other:?}"),
    }
}
