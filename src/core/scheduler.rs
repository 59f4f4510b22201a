//! Cron-based scheduler for periodic analysis runs.
//!
//! The pipeline itself exposes only a synchronous run-once entry point;
//! this task wraps it in a cancellable periodic loop.

use crate::pipeline::Analyzer;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

pub struct AnalysisScheduler {
    analyzer: Arc<Analyzer>,
    symbols: Vec<String>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl AnalysisScheduler {
    /// Create a scheduler firing every `interval_seconds` for each symbol.
    /// An interval of 0 disables scheduling and is rejected.
    pub fn new(
        analyzer: Arc<Analyzer>,
        symbols: Vec<String>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday.
        let cron_expr = if interval_seconds >= 60 {
            let minutes = interval_seconds / 60;
            format!("0 */{} * * * *", minutes)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr)
            .map_err(|e| format!("invalid cron expression '{}': {}", cron_expr, e))?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            symbols = ?symbols,
            "scheduler created"
        );

        Ok(Self {
            analyzer,
            symbols,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn start(&self) {
        let analyzer = self.analyzer.clone();
        let symbols = self.symbols.clone();
        let schedule = self.schedule.clone();
        let handle_slot = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("scheduler started, waiting for first tick");
            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                match upcoming.next() {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let wait = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(wait).await;
                        }
                    }
                    None => {
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                for symbol in &symbols {
                    let decision = analyzer.run_once(symbol).await;
                    if decision.verdict == crate::models::Verdict::Error {
                        error!(symbol = %symbol, "scheduled analysis produced an error decision");
                    } else {
                        info!(
                            symbol = %symbol,
                            verdict = ?decision.verdict,
                            confidence = decision.confidence,
                            "scheduled analysis complete"
                        );
                    }
                }
            }
        });

        let mut slot = handle_slot.write().await;
        *slot = Some(handle);
        info!("scheduler running");
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
