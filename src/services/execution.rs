//! Order execution sink interface.
//!
//! The pipeline's recommendation is advisory: accounting and statistics
//! belong to the executor, not the core. The paper executor records fills
//! verbatim and reports nothing it did not observe.

use crate::models::{Fill, SignalDirection};
use chrono::Utc;
use tokio::sync::RwLock;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait::async_trait]
pub trait OrderExecutor: Send + Sync {
    async fn place_order(
        &self,
        symbol: &str,
        direction: SignalDirection,
        quantity: f64,
        price: f64,
    ) -> Result<Fill, BoxError>;
}

/// Executor that fills every order on paper and keeps the fill log in
/// memory.
#[derive(Default)]
pub struct PaperExecutor {
    fills: RwLock<Vec<Fill>>,
}

impl PaperExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fills(&self) -> Vec<Fill> {
        self.fills.read().await.clone()
    }

    /// Total notional value of recorded fills.
    pub async fn total_notional(&self) -> f64 {
        self.fills
            .read()
            .await
            .iter()
            .map(|f| f.price * f.quantity)
            .sum()
    }
}

#[async_trait::async_trait]
impl OrderExecutor for PaperExecutor {
    async fn place_order(
        &self,
        symbol: &str,
        direction: SignalDirection,
        quantity: f64,
        price: f64,
    ) -> Result<Fill, BoxError> {
        if direction == SignalDirection::Neutral {
            return Err("refusing to place an order without a direction".into());
        }

        let executed_at = Utc::now();
        let fill = Fill {
            order_id: format!("paper-{}", executed_at.timestamp_millis()),
            symbol: symbol.to_string(),
            direction,
            price,
            quantity,
            executed_at,
        };
        self.fills.write().await.push(fill.clone());
        Ok(fill)
    }
}
