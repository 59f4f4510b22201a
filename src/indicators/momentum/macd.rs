//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD line = EMA(fast) - EMA(slow)
//! Signal = EMA(signal_period) of the MACD line
//! Histogram = MACD - Signal

use crate::indicators::math;

/// Per-bar MACD values.
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate the MACD line, signal line, and histogram series.
///
/// The line is defined where both EMAs are (index `slow - 1` onward); the
/// signal needs `signal_period` line values on top of that.
pub fn macd_series(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let n = closes.len();
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);

    let mut macd = vec![None; n];
    for i in 0..n {
        if let (Some(f), Some(s)) = (fast[i], slow[i]) {
            macd[i] = Some(f - s);
        }
    }

    // The signal line is an EMA over the defined stretch of the MACD line.
    let mut signal = vec![None; n];
    let first_defined = macd.iter().position(|v| v.is_some());
    if let Some(start) = first_defined {
        let line: Vec<f64> = macd[start..].iter().map(|v| v.unwrap()).collect();
        let smoothed = math::ema_series(&line, signal_period);
        for (offset, value) in smoothed.into_iter().enumerate() {
            signal[start + offset] = value;
        }
    }

    let mut histogram = vec![None; n];
    for i in 0..n {
        if let (Some(m), Some(s)) = (macd[i], signal[i]) {
            histogram[i] = Some(m - s);
        }
    }

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
