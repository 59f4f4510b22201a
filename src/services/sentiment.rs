//! Sentiment source interface.
//!
//! The pipeline treats sentiment as an opaque external reading; this crate
//! ships only a static implementation for wiring and tests.

use crate::models::SentimentSnapshot;
use tokio::sync::RwLock;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait::async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn get_sentiment(&self, symbol: &str) -> Result<SentimentSnapshot, BoxError>;
}

/// Fixed sentiment reading, settable at runtime.
pub struct StaticSentiment {
    snapshot: RwLock<SentimentSnapshot>,
}

impl StaticSentiment {
    pub fn new(snapshot: SentimentSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    pub async fn set(&self, snapshot: SentimentSnapshot) {
        *self.snapshot.write().await = snapshot;
    }
}

impl Default for StaticSentiment {
    fn default() -> Self {
        Self::new(SentimentSnapshot {
            score: 50.0,
            change_24h: 0.0,
        })
    }
}

#[async_trait::async_trait]
impl SentimentProvider for StaticSentiment {
    async fn get_sentiment(&self, _symbol: &str) -> Result<SentimentSnapshot, BoxError> {
        Ok(*self.snapshot.read().await)
    }
}
