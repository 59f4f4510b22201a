//! Binance REST market data provider.
//!
//! Thin wrapper over the public `/api/v3` endpoints; requests are retried
//! with exponential backoff before the failure surfaces to the pipeline as
//! an upstream error.

use crate::services::market_data::MarketDataProvider;
use crate::models::{Candle, Trade};
use backon::{ExponentialBuilder, Retryable};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub struct BinanceMarketData {
    http: reqwest::Client,
    base_url: String,
    interval: String,
}

impl BinanceMarketData {
    pub fn new(base_url: impl Into<String>, interval: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into(),
            interval: interval.into(),
        }
    }

    async fn get_json(&self, url: String) -> Result<Value, BoxError> {
        let fetch = || async {
            self.http
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<Value>()
                .await
        };
        let value = fetch
            .retry(ExponentialBuilder::default().with_max_times(3))
            .await?;
        Ok(value)
    }
}

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentTrade {
    price: String,
    qty: String,
    is_buyer_maker: bool,
}

/// One kline row is a heterogeneous JSON array:
/// `[open_time, "open", "high", "low", "close", "volume", close_time, ...]`.
fn parse_kline(row: &Value) -> Result<Candle, BoxError> {
    let fields = row
        .as_array()
        .ok_or("kline row is not an array")?;
    if fields.len() < 6 {
        return Err(format!("kline row too short: {} fields", fields.len()).into());
    }

    let timestamp = fields[0]
        .as_i64()
        .ok_or("kline open time is not an integer")?;
    let number = |index: usize, name: &str| -> Result<f64, BoxError> {
        fields[index]
            .as_str()
            .ok_or_else(|| format!("kline {} is not a string", name))?
            .parse::<f64>()
            .map_err(|e| format!("invalid kline {}: {}", name, e).into())
    };

    Ok(Candle::new(
        timestamp,
        number(1, "open")?,
        number(2, "high")?,
        number(3, "low")?,
        number(4, "close")?,
        number(5, "volume")?,
    ))
}

#[async_trait::async_trait]
impl MarketDataProvider for BinanceMarketData {
    async fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, BoxError> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, self.interval, limit
        );
        let body = self.get_json(url).await?;
        let rows = body.as_array().ok_or("klines response is not an array")?;

        let mut candles = Vec::with_capacity(rows.len());
        for row in rows {
            candles.push(parse_kline(row)?);
        }
        debug!(symbol = %symbol, count = candles.len(), "fetched candles");
        Ok(candles)
    }

    async fn get_latest_price(&self, symbol: &str) -> Result<f64, BoxError> {
        let url = format!("{}/api/v3/ticker/price?symbol={}", self.base_url, symbol);
        let body = self.get_json(url).await?;
        let ticker: TickerPrice = serde_json::from_value(body)?;
        Ok(ticker.price.parse::<f64>()?)
    }

    async fn get_recent_trades(&self, symbol: &str, limit: usize) -> Result<Vec<Trade>, BoxError> {
        let url = format!(
            "{}/api/v3/trades?symbol={}&limit={}",
            self.base_url, symbol, limit
        );
        let body = self.get_json(url).await?;
        let raw: Vec<RecentTrade> = serde_json::from_value(body)?;

        let mut trades = Vec::with_capacity(raw.len());
        for trade in raw {
            trades.push(Trade::new(
                trade.price.parse::<f64>()?,
                trade.qty.parse::<f64>()?,
                trade.is_buyer_maker,
            ));
        }
        debug!(symbol = %symbol, count = trades.len(), "fetched recent trades");
        Ok(trades)
    }
}
