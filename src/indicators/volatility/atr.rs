//! ATR (Average True Range) indicator
//!
//! Wilder-smoothed average of true range: seed with the simple mean of the
//! first `period` true ranges, then `(prev * (n - 1) + tr) / n`.

use crate::indicators::math;
use crate::models::Candle;

/// Calculate the ATR series. Defined from index `period` onward (the first
/// true range needs a previous close).
pub fn atr_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut tr_values = Vec::with_capacity(n - 1);
    for i in 1..n {
        tr_values.push(math::true_range(
            candles[i].high,
            candles[i].low,
            candles[i - 1].close,
        ));
    }

    let smoothed = math::wilder_series(&tr_values, period);
    for (i, value) in smoothed.into_iter().enumerate() {
        out[i + 1] = value;
    }
    out
}
