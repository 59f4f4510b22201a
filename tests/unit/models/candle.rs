//! Tests for candle validation

use quantrix::error::EngineError;
use quantrix::indicators::validate_series;
use quantrix::models::Candle;

#[test]
fn finite_check_catches_every_field() {
    let good = Candle::new(0, 1.0, 2.0, 0.5, 1.5, 100.0);
    assert!(good.is_finite());

    let mut bad = good.clone();
    bad.high = f64::INFINITY;
    assert!(!bad.is_finite());

    let mut bad = good.clone();
    bad.volume = f64::NAN;
    assert!(!bad.is_finite());
}

#[test]
fn valid_series_passes() {
    let candles: Vec<Candle> = (0..5)
        .map(|i| Candle::new(i * 1000, 1.0, 2.0, 0.5, 1.5, 100.0))
        .collect();
    assert!(validate_series(&candles).is_ok());
}

#[test]
fn empty_series_fails() {
    assert!(matches!(
        validate_series(&[]),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn duplicate_timestamps_fail() {
    let candles = vec![
        Candle::new(1000, 1.0, 2.0, 0.5, 1.5, 100.0),
        Candle::new(1000, 1.0, 2.0, 0.5, 1.5, 100.0),
    ];
    let err = validate_series(&candles).unwrap_err();
    assert!(err.to_string().contains("timestamp"));
}

#[test]
fn candle_serde_round_trip() {
    let candle = Candle::new(1_700_000_000_000, 1.0, 2.0, 0.5, 1.5, 100.0);
    let json = serde_json::to_string(&candle).unwrap();
    let back: Candle = serde_json::from_str(&json).unwrap();
    assert_eq!(candle, back);
}
