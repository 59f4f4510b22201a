//! Market data provider interface.

use crate::models::{Candle, Trade};
use std::collections::HashMap;
use tokio::sync::RwLock;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Get historical candles for a symbol, oldest first.
    async fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, BoxError>;

    /// Get the current instantaneous price for a symbol.
    async fn get_latest_price(&self, symbol: &str) -> Result<f64, BoxError>;

    /// Get a batch of recently executed trades for a symbol.
    async fn get_recent_trades(&self, symbol: &str, limit: usize) -> Result<Vec<Trade>, BoxError>;
}

/// In-memory provider serving preloaded data; used by tests and the demo
/// run when no exchange is reachable.
#[derive(Default)]
pub struct StaticMarketData {
    candles: RwLock<HashMap<String, Vec<Candle>>>,
    trades: RwLock<HashMap<String, Vec<Trade>>>,
    prices: RwLock<HashMap<String, f64>>,
}

impl StaticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_candles(&self, symbol: &str, candles: Vec<Candle>) {
        self.candles.write().await.insert(symbol.to_string(), candles);
    }

    pub async fn set_trades(&self, symbol: &str, trades: Vec<Trade>) {
        self.trades.write().await.insert(symbol.to_string(), trades);
    }

    pub async fn set_price(&self, symbol: &str, price: f64) {
        self.prices.write().await.insert(symbol.to_string(), price);
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for StaticMarketData {
    async fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, BoxError> {
        let candles = self.candles.read().await;
        match candles.get(symbol) {
            Some(series) => {
                let start = series.len().saturating_sub(limit);
                Ok(series[start..].to_vec())
            }
            None => Err(format!("no candle data loaded for {}", symbol).into()),
        }
    }

    async fn get_latest_price(&self, symbol: &str) -> Result<f64, BoxError> {
        if let Some(&price) = self.prices.read().await.get(symbol) {
            return Ok(price);
        }
        // Fall back to the last loaded close.
        let candles = self.candles.read().await;
        candles
            .get(symbol)
            .and_then(|series| series.last())
            .map(|c| c.close)
            .ok_or_else(|| format!("no price loaded for {}", symbol).into())
    }

    async fn get_recent_trades(&self, symbol: &str, limit: usize) -> Result<Vec<Trade>, BoxError> {
        let trades = self.trades.read().await;
        match trades.get(symbol) {
            Some(batch) => {
                let start = batch.len().saturating_sub(limit);
                Ok(batch[start..].to_vec())
            }
            None => Err(format!("no trade data loaded for {}", symbol).into()),
        }
    }
}
