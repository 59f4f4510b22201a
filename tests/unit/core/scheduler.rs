//! Tests for the analysis scheduler

use quantrix::config::Config;
use quantrix::core::scheduler::AnalysisScheduler;
use quantrix::pipeline::{Analyzer, PipelineContext};
use quantrix::services::market_data::StaticMarketData;
use quantrix::services::{NoopNotifier, StaticSentiment};
use std::sync::Arc;

fn analyzer() -> Arc<Analyzer> {
    let ctx = Arc::new(PipelineContext::new(
        Config::default(),
        Arc::new(StaticMarketData::new()),
        Arc::new(StaticSentiment::default()),
        Arc::new(NoopNotifier),
    ));
    Arc::new(Analyzer::new(ctx))
}

#[tokio::test]
async fn zero_interval_is_rejected() {
    let result = AnalysisScheduler::new(analyzer(), vec!["BNBUSDT".to_string()], 0);
    assert!(result.is_err());
}

#[tokio::test]
async fn sub_minute_and_minute_intervals_are_accepted() {
    assert!(AnalysisScheduler::new(analyzer(), vec!["BNBUSDT".to_string()], 30).is_ok());
    assert!(AnalysisScheduler::new(analyzer(), vec!["BNBUSDT".to_string()], 3600).is_ok());
}

#[tokio::test]
async fn start_and_stop_toggle_the_running_state() {
    let scheduler =
        AnalysisScheduler::new(analyzer(), vec!["BNBUSDT".to_string()], 3600).unwrap();
    assert!(!scheduler.is_running().await);

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}
