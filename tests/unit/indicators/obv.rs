//! Tests for On-Balance Volume

use quantrix::indicators::volume::obv_series;
use quantrix::models::Candle;

fn candle(i: usize, close: f64, volume: f64) -> Candle {
    Candle::new(
        i as i64 * 3_600_000,
        close,
        close + 1.0,
        close - 1.0,
        close,
        volume,
    )
}

#[test]
fn obv_accumulates_signed_volume() {
    let candles = vec![
        candle(0, 10.0, 5.0),
        candle(1, 11.0, 6.0), // up: +6
        candle(2, 11.0, 7.0), // flat: carry
        candle(3, 9.0, 8.0),  // down: -8
    ];
    let out = obv_series(&candles);

    assert_eq!(out[0], Some(0.0));
    assert_eq!(out[1], Some(6.0));
    assert_eq!(out[2], Some(6.0));
    assert_eq!(out[3], Some(-2.0));
}

#[test]
fn obv_defined_for_every_row() {
    let candles: Vec<Candle> = (0..30)
        .map(|i| candle(i, 100.0 + (i as f64).sin(), 1000.0))
        .collect();
    assert!(obv_series(&candles).iter().all(|v| v.is_some()));
}

#[test]
fn obv_empty_input() {
    assert!(obv_series(&[]).is_empty());
}
