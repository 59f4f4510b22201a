//! Slow stochastic oscillator (%K / %D)
//!
//! Fast %K = 100 * (close - lowest low) / (highest high - lowest low) over
//! `k_period` bars, smoothed by an SMA of `k_smoothing` bars ("slow %K").
//! %D = SMA of slow %K over `d_period` bars.

use crate::indicators::math;
use crate::models::Candle;

/// Per-bar slow %K and %D values.
pub struct StochasticSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
}

/// Calculate the slow stochastic series.
///
/// A zero high/low range reads as the 50 midpoint rather than dividing by
/// zero.
pub fn stochastic_series(
    candles: &[Candle],
    k_period: usize,
    k_smoothing: usize,
    d_period: usize,
) -> StochasticSeries {
    let n = candles.len();
    let mut fast_k = vec![None; n];
    if k_period == 0 {
        return StochasticSeries {
            k: fast_k.clone(),
            d: fast_k,
        };
    }

    for i in (k_period - 1)..n {
        let window = &candles[i + 1 - k_period..=i];
        let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        let range = highest - lowest;
        let value = if range == 0.0 {
            50.0
        } else {
            100.0 * (candles[i].close - lowest) / range
        };
        fast_k[i] = Some(value);
    }

    let k = math::sma_of_series(&fast_k, k_smoothing);
    let d = math::sma_of_series(&k, d_period);

    StochasticSeries { k, d }
}
