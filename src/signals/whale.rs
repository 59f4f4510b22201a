//! Large-trade ("whale") detection evaluator.

use crate::models::{SignalDirection, SignalVote, Trade};

const SOURCE: &str = "whale";
const CONFIDENCE: f64 = 80.0;
const DOMINANCE: f64 = 1.5;

/// Evaluate the large-trade vote from a recent batch of executed trades.
///
/// Trades below the notional threshold are ignored. A side wins only when
/// it dominates the other on both trade count and notional volume by more
/// than 50%; anything less is Neutral/0.
pub fn evaluate_whales(trades: &[Trade], notional_threshold: f64) -> SignalVote {
    let whales: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.notional() >= notional_threshold)
        .collect();

    if whales.is_empty() {
        return SignalVote::neutral(SOURCE);
    }

    // A maker on the buy side means the seller was the aggressor.
    let (buys, sells): (Vec<&&Trade>, Vec<&&Trade>) =
        whales.iter().partition(|t| !t.is_buyer_maker);

    let buy_notional: f64 = buys.iter().map(|t| t.notional()).sum();
    let sell_notional: f64 = sells.iter().map(|t| t.notional()).sum();

    if buys.len() as f64 > sells.len() as f64 * DOMINANCE && buy_notional > sell_notional * DOMINANCE
    {
        return SignalVote::new(SOURCE, SignalDirection::Buy, CONFIDENCE);
    }
    if sells.len() as f64 > buys.len() as f64 * DOMINANCE && sell_notional > buy_notional * DOMINANCE
    {
        return SignalVote::new(SOURCE, SignalDirection::Sell, CONFIDENCE);
    }

    SignalVote::neutral(SOURCE)
}
