//! Tests for the indicator engine

use quantrix::error::EngineError;
use quantrix::indicators::compute_indicators;
use quantrix::models::Candle;

fn wave_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.15).sin() * 10.0;
            Candle::new(
                i as i64 * 3_600_000,
                close - 0.2,
                close + 1.0,
                close - 1.0,
                close,
                1000.0 + i as f64,
            )
        })
        .collect()
}

#[test]
fn full_series_fills_every_column() {
    let candles = wave_candles(250);
    let frame = compute_indicators(&candles).unwrap();

    assert_eq!(frame.len(), 250);
    let latest = frame.latest().unwrap();
    assert!(latest.rsi.is_some());
    assert!(latest.macd.is_some());
    assert!(latest.macd_signal.is_some());
    assert!(latest.macd_hist.is_some());
    assert!(latest.bb_upper.is_some());
    assert!(latest.bb_middle.is_some());
    assert!(latest.bb_lower.is_some());
    assert!(latest.sma_20.is_some());
    assert!(latest.sma_50.is_some());
    assert!(latest.sma_200.is_some());
    assert!(latest.ema_20.is_some());
    assert!(latest.stoch_k.is_some());
    assert!(latest.stoch_d.is_some());
    assert!(latest.atr.is_some());
    assert!(latest.obv.is_some());
}

#[test]
fn warmup_windows_stay_undefined() {
    let candles = wave_candles(250);
    let frame = compute_indicators(&candles).unwrap();

    let first = frame.get(0).unwrap();
    assert!(first.rsi.is_none());
    assert!(first.sma_20.is_none());
    assert!(first.obv.is_some());

    // SMA-200 turns on exactly at the 200th bar.
    assert!(frame.get(198).unwrap().sma_200.is_none());
    assert!(frame.get(199).unwrap().sma_200.is_some());
}

#[test]
fn short_series_still_yields_a_frame() {
    let candles = wave_candles(10);
    let frame = compute_indicators(&candles).unwrap();

    assert_eq!(frame.len(), 10);
    assert!(frame.rows().iter().all(|r| r.rsi.is_none()));
}

#[test]
fn same_input_yields_same_frame() {
    let candles = wave_candles(120);
    let a = compute_indicators(&candles).unwrap();
    let b = compute_indicators(&candles).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rsi_column_stays_within_bounds() {
    let candles = wave_candles(250);
    let frame = compute_indicators(&candles).unwrap();

    for row in frame.rows() {
        if let Some(rsi) = row.rsi {
            assert!((0.0..=100.0).contains(&rsi));
        }
    }
}

#[test]
fn empty_series_is_rejected() {
    match compute_indicators(&[]) {
        Err(EngineError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn non_monotonic_timestamps_are_rejected() {
    let mut candles = wave_candles(60);
    candles[30].timestamp = candles[29].timestamp;
    assert!(matches!(
        compute_indicators(&candles),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    let mut candles = wave_candles(60);
    candles[10].close = f64::NAN;
    assert!(matches!(
        compute_indicators(&candles),
        Err(EngineError::InvalidInput(_))
    ));
}
