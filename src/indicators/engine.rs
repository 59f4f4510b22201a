//! Indicator engine: derives the full indicator table from a candle series.

use crate::error::EngineError;
use crate::indicators::momentum::{macd_series, rsi_series, stochastic_series};
use crate::indicators::trend::{ema_close_series, sma_close_series};
use crate::indicators::validation::validate_series;
use crate::indicators::volatility::{atr_series, bollinger_series};
use crate::indicators::volume::obv_series;
use crate::models::{Candle, IndicatorFrame, IndicatorRow};

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BB_PERIOD: usize = 20;
pub const BB_STD: f64 = 2.0;
pub const STOCH_K: usize = 14;
pub const STOCH_SMOOTH: usize = 3;
pub const STOCH_D: usize = 3;
pub const ATR_PERIOD: usize = 14;

/// Compute every indicator column for the given candle series.
///
/// Pure function of its input: the same series always yields the same frame.
/// Short series still return a frame with leading `None` rows; only
/// malformed input (empty, non-monotonic timestamps, non-finite values) is
/// rejected.
pub fn compute_indicators(candles: &[Candle]) -> Result<IndicatorFrame, EngineError> {
    validate_series(candles)?;

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let rsi = rsi_series(&closes, RSI_PERIOD);
    let macd = macd_series(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
    let bollinger = bollinger_series(candles, BB_PERIOD, BB_STD);
    let sma_20 = sma_close_series(candles, 20);
    let sma_50 = sma_close_series(candles, 50);
    let sma_200 = sma_close_series(candles, 200);
    let ema_20 = ema_close_series(candles, 20);
    let stochastic = stochastic_series(candles, STOCH_K, STOCH_SMOOTH, STOCH_D);
    let atr = atr_series(candles, ATR_PERIOD);
    let obv = obv_series(candles);

    let rows = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| IndicatorRow {
            timestamp: candle.timestamp,
            close: candle.close,
            rsi: rsi[i],
            macd: macd.macd[i],
            macd_signal: macd.signal[i],
            macd_hist: macd.histogram[i],
            bb_upper: bollinger.upper[i],
            bb_middle: bollinger.middle[i],
            bb_lower: bollinger.lower[i],
            sma_20: sma_20[i],
            sma_50: sma_50[i],
            sma_200: sma_200[i],
            ema_20: ema_20[i],
            stoch_k: stochastic.k[i],
            stoch_d: stochastic.d[i],
            atr: atr[i],
            obv: obv[i],
        })
        .collect();

    Ok(IndicatorFrame::new(rows))
}
