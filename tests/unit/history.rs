//! Tests for the decision history

use quantrix::history::DecisionHistory;
use quantrix::models::Decision;

fn decision(symbol: &str) -> Decision {
    Decision::error(symbol)
}

#[tokio::test]
async fn append_and_latest() {
    let history = DecisionHistory::new(10);
    assert!(history.is_empty().await);
    assert!(history.latest().await.is_none());

    history.append(decision("A")).await;
    history.append(decision("B")).await;

    assert_eq!(history.len().await, 2);
    assert_eq!(history.latest().await.unwrap().symbol, "B");
}

#[tokio::test]
async fn capacity_evicts_oldest_first() {
    let history = DecisionHistory::new(3);
    for symbol in ["A", "B", "C", "D", "E"] {
        history.append(decision(symbol)).await;
    }

    let recent = history.recent(10).await;
    let symbols: Vec<&str> = recent.iter().map(|d| d.symbol.as_str()).collect();
    assert_eq!(symbols, ["C", "D", "E"]);
}

#[tokio::test]
async fn recent_returns_newest_slice_oldest_first() {
    let history = DecisionHistory::new(10);
    for symbol in ["A", "B", "C"] {
        history.append(decision(symbol)).await;
    }

    let recent = history.recent(2).await;
    let symbols: Vec<&str> = recent.iter().map(|d| d.symbol.as_str()).collect();
    assert_eq!(symbols, ["B", "C"]);
}

#[tokio::test]
async fn zero_capacity_is_clamped_to_one() {
    let history = DecisionHistory::new(0);
    history.append(decision("A")).await;
    history.append(decision("B")).await;

    assert_eq!(history.len().await, 1);
    assert_eq!(history.latest().await.unwrap().symbol, "B");
}
