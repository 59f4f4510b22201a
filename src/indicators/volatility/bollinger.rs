//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (num_std * population standard deviation)
//! Lower Band = Middle - (num_std * population standard deviation)

use crate::indicators::math;
use crate::models::Candle;

/// Per-bar band values.
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate the Bollinger Bands series over close prices.
pub fn bollinger_series(candles: &[Candle], period: usize, num_std: f64) -> BollingerSeries {
    let n = candles.len();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let middle = math::sma_series(&closes, period);
    let mut upper = vec![None; n];
    let mut lower = vec![None; n];

    if period > 0 {
        for i in (period.saturating_sub(1))..n {
            if let Some(mid) = middle[i] {
                let std = math::stddev_population(&closes[i + 1 - period..=i]);
                upper[i] = Some(mid + num_std * std);
                lower[i] = Some(mid - num_std * std);
            }
        }
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}
