//! EMA (Exponential Moving Average) indicator

use crate::indicators::math;
use crate::models::Candle;

/// Calculate the EMA series over close prices for a specific period.
pub fn ema_close_series(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema_series(&closes, period)
}
