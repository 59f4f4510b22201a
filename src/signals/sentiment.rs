//! Sentiment evaluator.
//!
//! The sentiment score itself comes from an external collaborator; this
//! evaluator only thresholds the supplied reading.

use crate::models::{SentimentSnapshot, SignalDirection, SignalVote};

const SOURCE: &str = "sentiment";
const CONFIDENCE: f64 = 60.0;

/// Evaluate the sentiment vote from a score snapshot.
pub fn evaluate_sentiment(snapshot: &SentimentSnapshot) -> SignalVote {
    if snapshot.score >= 70.0 && snapshot.change_24h > 0.0 {
        return SignalVote::new(SOURCE, SignalDirection::Buy, CONFIDENCE);
    }
    if snapshot.score <= 30.0 && snapshot.change_24h < 0.0 {
        return SignalVote::new(SOURCE, SignalDirection::Sell, CONFIDENCE);
    }
    SignalVote::neutral(SOURCE)
}
