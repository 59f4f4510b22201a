//! In-memory, append-only decision history.
//!
//! The pipeline itself holds no mutable state; this history is owned by the
//! caller and is the single shared-mutable boundary in the system. Appends
//! are serialized through the lock so concurrent scheduled and HTTP-driven
//! runs interleave safely.

use crate::models::Decision;
use tokio::sync::RwLock;

pub struct DecisionHistory {
    entries: RwLock<Vec<Decision>>,
    capacity: usize,
}

impl DecisionHistory {
    /// A history retaining at most `capacity` most recent decisions.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    pub async fn append(&self, decision: Decision) {
        let mut entries = self.entries.write().await;
        entries.push(decision);
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
    }

    pub async fn latest(&self) -> Option<Decision> {
        self.entries.read().await.last().cloned()
    }

    /// Most recent `limit` decisions, oldest first.
    pub async fn recent(&self, limit: usize) -> Vec<Decision> {
        let entries = self.entries.read().await;
        let start = entries.len().saturating_sub(limit);
        entries[start..].to_vec()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
