//! Weighted-majority aggregation of evaluator votes.

use crate::models::{SignalDirection, SignalVote};

/// Combine an arbitrary set of votes into one direction and confidence.
///
/// Neutral votes are discarded first. Each side's score is the sum of its
/// confidences divided by the TOTAL active count, so a vote missing from one
/// side dilutes the other side's average. The winning side's score is then
/// scaled again by the fraction of active votes actually on that side,
/// penalizing decisions carried by a minority of the active evaluators.
/// An exact tie (including no active votes) is Neutral/0.
pub fn aggregate(votes: &[SignalVote]) -> (SignalDirection, f64) {
    let active: Vec<&SignalVote> = votes
        .iter()
        .filter(|v| v.direction != SignalDirection::Neutral)
        .collect();

    if active.is_empty() {
        return (SignalDirection::Neutral, 0.0);
    }

    let total = active.len() as f64;
    let buys: Vec<&&SignalVote> = active
        .iter()
        .filter(|v| v.direction == SignalDirection::Buy)
        .collect();
    let sells: Vec<&&SignalVote> = active
        .iter()
        .filter(|v| v.direction == SignalDirection::Sell)
        .collect();

    let buy_score = buys.iter().map(|v| v.confidence).sum::<f64>() / total;
    let sell_score = sells.iter().map(|v| v.confidence).sum::<f64>() / total;

    if buy_score > sell_score {
        (
            SignalDirection::Buy,
            buy_score * (buys.len() as f64 / total),
        )
    } else if sell_score > buy_score {
        (
            SignalDirection::Sell,
            sell_score * (sells.len() as f64 / total),
        )
    } else {
        (SignalDirection::Neutral, 0.0)
    }
}
