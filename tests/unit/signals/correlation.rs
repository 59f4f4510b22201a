//! Tests for the correlation evaluator

use quantrix::models::SignalDirection;
use quantrix::signals::evaluate_correlation;

#[test]
fn strong_positive_follows_rising_reference() {
    let primary: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let reference: Vec<f64> = (0..30).map(|i| 50.0 + i as f64 * 2.0).collect();

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.source, "correlation");
    assert_eq!(vote.direction, SignalDirection::Buy);
    assert!((vote.confidence - 70.0).abs() < 1e-9);
}

#[test]
fn strong_positive_follows_falling_reference() {
    let primary: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let reference: Vec<f64> = (0..30).map(|i| 50.0 - i as f64 * 0.5).collect();

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.direction, SignalDirection::Sell);
    assert!((vote.confidence - 70.0).abs() < 1e-9);
}

#[test]
fn strong_negative_inverts_the_reference_trend() {
    // Primary falls while the reference rises: r = -1, so a bullish
    // reference implies the primary keeps moving against it.
    let primary: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
    let reference: Vec<f64> = (0..30).map(|i| 50.0 + i as f64).collect();

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.direction, SignalDirection::Sell);
    assert!((vote.confidence - 70.0).abs() < 1e-9);
}

#[test]
fn moderate_correlation_gets_the_lower_band() {
    // r is exactly 0.5 for this pair.
    let primary = [1.0, 2.0, 3.0, 4.0, 5.0];
    let reference = [1.0, 3.0, 5.0, 2.0, 4.0];

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.direction, SignalDirection::Buy);
    assert!((vote.confidence - 50.0).abs() < 1e-9);
}

#[test]
fn weak_correlation_is_neutral() {
    // r is -0.1 for this pair.
    let primary = [1.0, 2.0, 3.0, 4.0, 5.0];
    let reference = [3.0, 5.0, 1.0, 2.0, 4.0];

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.direction, SignalDirection::Neutral);
    assert_eq!(vote.confidence, 0.0);
}

#[test]
fn series_are_trimmed_to_the_recent_overlap() {
    // Only the last five primary points overlap the reference; the earlier
    // flat stretch must not enter the window.
    let primary = [7.0, 7.0, 7.0, 7.0, 7.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let reference = [2.0, 4.0, 6.0, 8.0, 10.0];

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.direction, SignalDirection::Buy);
    assert!((vote.confidence - 70.0).abs() < 1e-9);
}

#[test]
fn tiny_overlap_is_neutral() {
    let vote = evaluate_correlation(&[1.0, 2.0, 3.0], &[4.0]);
    assert_eq!(vote.direction, SignalDirection::Neutral);
}

#[test]
fn flat_series_is_neutral() {
    let primary = [5.0; 20];
    let reference: Vec<f64> = (0..20).map(|i| i as f64).collect();

    let vote = evaluate_correlation(&primary, &reference);
    assert_eq!(vote.direction, SignalDirection::Neutral);
}
