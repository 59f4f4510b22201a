//! Tests for the sentiment evaluator

use quantrix::models::{SentimentSnapshot, SignalDirection};
use quantrix::signals::evaluate_sentiment;

fn snapshot(score: f64, change_24h: f64) -> SentimentSnapshot {
    SentimentSnapshot { score, change_24h }
}

#[test]
fn greed_with_rising_score_votes_buy() {
    let vote = evaluate_sentiment(&snapshot(75.0, 3.0));
    assert_eq!(vote.source, "sentiment");
    assert_eq!(vote.direction, SignalDirection::Buy);
    assert!((vote.confidence - 60.0).abs() < 1e-9);
}

#[test]
fn fear_with_falling_score_votes_sell() {
    let vote = evaluate_sentiment(&snapshot(20.0, -5.0));
    assert_eq!(vote.direction, SignalDirection::Sell);
    assert!((vote.confidence - 60.0).abs() < 1e-9);
}

#[test]
fn boundaries_are_inclusive_but_need_momentum() {
    // Score at the edge with a flat change is not a signal.
    assert_eq!(
        evaluate_sentiment(&snapshot(70.0, 0.0)).direction,
        SignalDirection::Neutral
    );
    assert_eq!(
        evaluate_sentiment(&snapshot(30.0, 0.0)).direction,
        SignalDirection::Neutral
    );
    // The edge score with momentum qualifies.
    assert_eq!(
        evaluate_sentiment(&snapshot(70.0, 0.1)).direction,
        SignalDirection::Buy
    );
    assert_eq!(
        evaluate_sentiment(&snapshot(30.0, -0.1)).direction,
        SignalDirection::Sell
    );
}

#[test]
fn midrange_score_is_neutral() {
    let vote = evaluate_sentiment(&snapshot(50.0, 10.0));
    assert_eq!(vote.direction, SignalDirection::Neutral);
    assert_eq!(vote.confidence, 0.0);
}

#[test]
fn extreme_score_against_momentum_is_neutral() {
    // Greedy but cooling off, or fearful but recovering.
    assert_eq!(
        evaluate_sentiment(&snapshot(85.0, -2.0)).direction,
        SignalDirection::Neutral
    );
    assert_eq!(
        evaluate_sentiment(&snapshot(15.0, 2.0)).direction,
        SignalDirection::Neutral
    );
}
