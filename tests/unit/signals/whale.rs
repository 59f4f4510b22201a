//! Tests for the large-trade evaluator

use quantrix::models::{SignalDirection, Trade};
use quantrix::signals::evaluate_whales;

const THRESHOLD: f64 = 10_000.0;

fn buy(notional: f64) -> Trade {
    Trade::new(notional, 1.0, false)
}

fn sell(notional: f64) -> Trade {
    Trade::new(notional, 1.0, true)
}

#[test]
fn small_trades_are_ignored() {
    let trades: Vec<Trade> = (0..50).map(|_| buy(500.0)).collect();
    let vote = evaluate_whales(&trades, THRESHOLD);
    assert_eq!(vote.source, "whale");
    assert_eq!(vote.direction, SignalDirection::Neutral);
    assert_eq!(vote.confidence, 0.0);
}

#[test]
fn empty_batch_is_neutral() {
    let vote = evaluate_whales(&[], THRESHOLD);
    assert_eq!(vote.direction, SignalDirection::Neutral);
}

#[test]
fn buy_dominance_on_count_and_notional() {
    let trades = vec![
        buy(20_000.0),
        buy(25_000.0),
        buy(30_000.0),
        buy(15_000.0),
        sell(20_000.0),
    ];
    let vote = evaluate_whales(&trades, THRESHOLD);
    assert_eq!(vote.direction, SignalDirection::Buy);
    assert!((vote.confidence - 80.0).abs() < 1e-9);
}

#[test]
fn sell_dominance_mirrors_buy() {
    let trades = vec![
        sell(20_000.0),
        sell(25_000.0),
        sell(30_000.0),
        sell(15_000.0),
        buy(20_000.0),
    ];
    let vote = evaluate_whales(&trades, THRESHOLD);
    assert_eq!(vote.direction, SignalDirection::Sell);
    assert!((vote.confidence - 80.0).abs() < 1e-9);
}

#[test]
fn borderline_count_ratio_is_not_dominance() {
    // 3 buys vs 2 sells: 3 is not strictly greater than 2 * 1.5.
    let trades = vec![
        buy(20_000.0),
        buy(20_000.0),
        buy(20_000.0),
        sell(20_000.0),
        sell(20_000.0),
    ];
    let vote = evaluate_whales(&trades, THRESHOLD);
    assert_eq!(vote.direction, SignalDirection::Neutral);
}

#[test]
fn count_dominance_alone_is_not_enough() {
    // Four buys outnumber the single sell, but the sell carries more
    // notional than 2/3 of the buy-side total.
    let trades = vec![
        buy(11_000.0),
        buy(11_000.0),
        buy(11_000.0),
        buy(11_000.0),
        sell(40_000.0),
    ];
    let vote = evaluate_whales(&trades, THRESHOLD);
    assert_eq!(vote.direction, SignalDirection::Neutral);
}

#[test]
fn threshold_is_inclusive() {
    // A trade exactly at the threshold counts.
    let trades = vec![buy(THRESHOLD), buy(THRESHOLD)];
    let vote = evaluate_whales(&trades, THRESHOLD);
    assert_eq!(vote.direction, SignalDirection::Buy);
}
