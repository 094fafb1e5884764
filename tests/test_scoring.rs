use mlfold::core::domain::GateKind;
use mlfold::engine::scorer::{
    compute_metrics, compute_score, separation_ratio, zero_state_uniformity,
};

use crate::common::config;

mod common;

const EPS: f64 = 1e-9;

#[test]
fn test_nor_score_formula() {
    // 0.6 / (0.6 * 0.62 * 0.6) = 2.688172...
    let c = config(45.0, 45.0, [0.6, 0.6, 0.62, 0.6]);
    let score = compute_score(&c, GateKind::Nor).unwrap();
    assert!((score - 2.688172043010753).abs() < EPS);

    // 0.6 / (0.6 * 0.18 * 0.6) = 9.259259...
    let c = config(90.0, 90.0, [0.6, 0.6, 0.18, 0.6]);
    let score = compute_score(&c, GateKind::Nor).unwrap();
    assert!((score - 9.259259259259259).abs() < EPS);
}

#[test]
fn test_nand_score_formula() {
    // (1 * 1 * 1) / 0.01 = 100
    let c = config(0.0, 0.0, [1.0, 1.0, 1.0, 0.01]);
    let score = compute_score(&c, GateKind::Nand).unwrap();
    assert!((score - 100.0).abs() < EPS);

    // (0.8 * 0.7 * 0.9) / 0.2 = 2.52
    let c = config(30.0, 60.0, [0.8, 0.7, 0.9, 0.2]);
    let score = compute_score(&c, GateKind::Nand).unwrap();
    assert!((score - 2.52).abs() < EPS);
}

#[test]
fn test_zero_denominator_is_invalid() {
    // p10 = 0 drives the NOR denominator to zero -> infinite ratio
    let c = config(0.0, 0.0, [0.5, 0.0, 0.3, 0.4]);
    assert!(separation_ratio(&c, GateKind::Nor).is_infinite());
    assert_eq!(compute_score(&c, GateKind::Nor), None);
    assert!(compute_metrics(&c, GateKind::Nor).is_none());

    // 0 / 0 -> NaN
    let c = config(0.0, 0.0, [0.0, 0.0, 0.3, 0.4]);
    assert!(separation_ratio(&c, GateKind::Nor).is_nan());
    assert_eq!(compute_score(&c, GateKind::Nor), None);

    // NAND divides by p11 alone
    let c = config(0.0, 0.0, [0.5, 0.6, 0.3, 0.0]);
    assert_eq!(compute_score(&c, GateKind::Nand), None);
}

#[test]
fn test_nan_input_is_invalid() {
    let c = config(0.0, 0.0, [f64::NAN, 0.5, 0.5, 0.5]);
    assert_eq!(compute_score(&c, GateKind::Nor), None);
    assert!(compute_metrics(&c, GateKind::Nor).is_none());
}

#[test]
fn test_zero_numerator_is_valid() {
    // A dark p00 is a terrible NOR candidate but a perfectly finite score
    let c = config(0.0, 0.0, [0.0, 0.5, 0.5, 0.5]);
    assert_eq!(compute_score(&c, GateKind::Nor), Some(0.0));
}

#[test]
fn test_negative_power_keeps_score_finite() {
    // Out-of-range inputs are not rejected, they just score badly
    let c = config(0.0, 0.0, [0.6, 0.6, -0.5, 0.6]);
    let score = compute_score(&c, GateKind::Nor).unwrap();
    assert!(score < 0.0);
    assert!(score.is_finite());
}

#[test]
fn test_infinite_power_is_caught_by_metrics() {
    // An infinite suppressed power gives a finite (zero) ratio but blows up
    // the uniformity, so the pipeline predicate still drops the record.
    let c = config(0.0, 0.0, [0.5, f64::INFINITY, 0.3, 0.4]);
    assert_eq!(compute_score(&c, GateKind::Nor), Some(0.0));
    assert!(compute_metrics(&c, GateKind::Nor).is_none());
}

#[test]
fn test_nor_uniformity() {
    // std([0.6, 0.62, 0.6], n-1) = 0.011547...
    let c = config(45.0, 45.0, [0.6, 0.6, 0.62, 0.6]);
    let u = zero_state_uniformity(&c, GateKind::Nor);
    assert!((u - 0.011547005383792516).abs() < EPS);

    // std([0.6, 0.18, 0.6], n-1) = 0.242487...
    let c = config(90.0, 90.0, [0.6, 0.6, 0.18, 0.6]);
    let u = zero_state_uniformity(&c, GateKind::Nor);
    assert!((u - 0.24248711305964282).abs() < EPS);
}

#[test]
fn test_nand_uniformity_of_equal_powers_is_zero() {
    // NAND suppresses p00, p10, p01; all equal -> zero spread
    let c = config(0.0, 0.0, [1.0, 1.0, 1.0, 0.01]);
    assert_eq!(zero_state_uniformity(&c, GateKind::Nand), 0.0);
}

#[test]
fn test_metrics_carry_both_values() {
    let c = config(45.0, 45.0, [0.6, 0.6, 0.62, 0.6]);
    let m = compute_metrics(&c, GateKind::Nor).unwrap();
    assert!((m.score - 2.688172043010753).abs() < EPS);
    assert!((m.uniformity - 0.011547005383792516).abs() < EPS);
}
