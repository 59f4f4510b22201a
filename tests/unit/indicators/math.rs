//! Tests for shared numeric primitives

use quantrix::indicators::math::{
    ema_series, pearson, round2, sma_of_series, sma_series, stddev_population, true_range,
    wilder_series,
};

const EPSILON: f64 = 1e-9;

#[test]
fn sma_defined_from_end_of_first_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let out = sma_series(&values, 3);

    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert!((out[2].unwrap() - 2.0).abs() < EPSILON);
    assert!((out[3].unwrap() - 3.0).abs() < EPSILON);
    assert!((out[4].unwrap() - 4.0).abs() < EPSILON);
}

#[test]
fn sma_short_input_is_all_none() {
    let values = [1.0, 2.0];
    assert!(sma_series(&values, 3).iter().all(|v| v.is_none()));
}

#[test]
fn ema_seeds_with_sma_of_first_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let out = ema_series(&values, 3);

    // Seed = SMA(1,2,3) = 2; k = 0.5 for period 3.
    assert!((out[2].unwrap() - 2.0).abs() < EPSILON);
    assert!((out[3].unwrap() - 3.0).abs() < EPSILON);
    assert!((out[4].unwrap() - 4.0).abs() < EPSILON);
}

#[test]
fn wilder_smoothing_recursion() {
    let values = [2.0, 2.0, 2.0, 5.0];
    let out = wilder_series(&values, 2);

    assert_eq!(out[0], None);
    assert!((out[1].unwrap() - 2.0).abs() < EPSILON);
    assert!((out[2].unwrap() - 2.0).abs() < EPSILON);
    assert!((out[3].unwrap() - 3.5).abs() < EPSILON);
}

#[test]
fn sma_of_series_requires_fully_defined_window() {
    let values = [None, Some(2.0), Some(4.0)];
    let out = sma_of_series(&values, 2);

    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert!((out[2].unwrap() - 3.0).abs() < EPSILON);
}

#[test]
fn stddev_is_population_form() {
    let window = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert!((stddev_population(&window) - 2.0).abs() < EPSILON);
}

#[test]
fn true_range_covers_gaps() {
    // Gap down: previous close above the bar's high.
    assert!((true_range(10.0, 8.0, 12.0) - 4.0).abs() < EPSILON);
    // No gap: plain high-low range.
    assert!((true_range(10.0, 8.0, 9.0) - 2.0).abs() < EPSILON);
}

#[test]
fn pearson_perfect_correlation() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0, 4.0, 6.0, 8.0];
    assert!((pearson(&x, &y).unwrap() - 1.0).abs() < EPSILON);

    let inverted = [8.0, 6.0, 4.0, 2.0];
    assert!((pearson(&x, &inverted).unwrap() + 1.0).abs() < EPSILON);
}

#[test]
fn pearson_rejects_degenerate_input() {
    assert_eq!(pearson(&[1.0], &[2.0]), None);
    assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    // Zero variance on one side.
    assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
}

#[test]
fn round2_rounds_to_cents() {
    assert!((round2(2.346) - 2.35).abs() < EPSILON);
    assert!((round2(-1.234) + 1.23).abs() < EPSILON);
    assert!((round2(100.0) - 100.0).abs() < EPSILON);
}
