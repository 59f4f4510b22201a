use serde::{Deserialize, Serialize};

/// One row of derived indicator values, positionally aligned with the input
/// candle it was computed for. Columns inside their warm-up window are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub timestamp: i64,
    pub close: f64,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub sma_20: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub ema_20: Option<f64>,
    pub stoch_k: Option<f64>,
    pub stoch_d: Option<f64>,
    pub atr: Option<f64>,
    pub obv: Option<f64>,
}

/// Indicator table with one row per input candle, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    pub fn new(rows: Vec<IndicatorRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&IndicatorRow> {
        self.rows.get(index)
    }

    /// Most recent row.
    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// Row immediately before the most recent one, for crossover checks.
    pub fn prior(&self) -> Option<&IndicatorRow> {
        if self.rows.len() < 2 {
            return None;
        }
        self.rows.get(self.rows.len() - 2)
    }
}
