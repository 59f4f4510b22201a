//! OBV (On-Balance Volume) indicator
//!
//! Cumulative running sum: add the bar's volume when the close rises versus
//! the prior close, subtract it when the close falls, carry the value
//! unchanged on a tie. The series starts at zero on the first candle.

use crate::models::Candle;

/// Calculate the OBV series. Defined for every row.
pub fn obv_series(candles: &[Candle]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(candles.len());
    let mut obv = 0.0;
    for (i, candle) in candles.iter().enumerate() {
        if i > 0 {
            let prev_close = candles[i - 1].close;
            if candle.close > prev_close {
                obv += candle.volume;
            } else if candle.close < prev_close {
                obv -= candle.volume;
            }
        }
        out.push(Some(obv));
    }
    out
}
