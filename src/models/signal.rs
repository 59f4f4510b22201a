use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Directional vote emitted by a single evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

/// Final pipeline outcome. `Error` is distinct from `Neutral`: it means no
/// evaluator could run at all, not that the market gave no signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Buy,
    Sell,
    Neutral,
    Error,
}

impl From<SignalDirection> for Verdict {
    fn from(direction: SignalDirection) -> Self {
        match direction {
            SignalDirection::Buy => Verdict::Buy,
            SignalDirection::Sell => Verdict::Sell,
            SignalDirection::Neutral => Verdict::Neutral,
        }
    }
}

/// One evaluator's {direction, confidence} contribution. Confidence is a
/// percentage in [0, 100]. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalVote {
    pub source: String,
    pub direction: SignalDirection,
    pub confidence: f64,
}

impl SignalVote {
    pub fn new(source: impl Into<String>, direction: SignalDirection, confidence: f64) -> Self {
        Self {
            source: source.into(),
            direction,
            confidence,
        }
    }

    pub fn neutral(source: impl Into<String>) -> Self {
        Self::new(source, SignalDirection::Neutral, 0.0)
    }
}

/// One trading recommendation, produced once per pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub symbol: String,
    pub verdict: Verdict,
    pub confidence: f64,
    pub reference_price: f64,
    pub price_target: f64,
    pub stop_loss: f64,
    pub votes: Vec<SignalVote>,
    pub generated_at: DateTime<Utc>,
}

impl Decision {
    /// Outcome for a run where every evaluator failed.
    pub fn error(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            verdict: Verdict::Error,
            confidence: 0.0,
            reference_price: 0.0,
            price_target: 0.0,
            stop_loss: 0.0,
            votes: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// One executed trade from the recent-trades feed.
///
/// `is_buyer_maker == false` means the buyer was the aggressor, i.e. an
/// aggressive buy-side trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub price: f64,
    pub quantity: f64,
    pub is_buyer_maker: bool,
}

impl Trade {
    pub fn new(price: f64, quantity: f64, is_buyer_maker: bool) -> Self {
        Self {
            price,
            quantity,
            is_buyer_maker,
        }
    }

    pub fn notional(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Externally supplied sentiment reading. Score is 0-100, change is the
/// signed 24h delta in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub score: f64,
    pub change_24h: f64,
}

/// Fill record returned by an order executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub order_id: String,
    pub symbol: String,
    pub direction: SignalDirection,
    pub price: f64,
    pub quantity: f64,
    pub executed_at: DateTime<Utc>,
}
