//! Quantrix Worker
//!
//! Runs the scheduled analysis loop: fetch market data, evaluate signals,
//! notify, and (optionally) place paper orders. Can be run alongside the
//! API server or on its own.

use dotenvy::dotenv;
use quantrix::config::Config;
use quantrix::core::scheduler::AnalysisScheduler;
use quantrix::logging;
use quantrix::metrics::Metrics;
use quantrix::pipeline::{Analyzer, PipelineContext};
use quantrix::services::{
    BinanceMarketData, NoopNotifier, Notifier, PaperExecutor, StaticSentiment, TelegramNotifier,
};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let config = Config::from_env();
    let env = quantrix::config::get_environment();
    info!("Starting Quantrix Worker");
    info!(environment = %env, "Environment");
    info!(
        interval = config.analysis_interval_seconds,
        "Analysis: every {} seconds", config.analysis_interval_seconds
    );

    // Initialize metrics
    let metrics = Arc::new(Metrics::new()?);

    let market = Arc::new(BinanceMarketData::new(
        config.binance_base_url.clone(),
        config.interval.clone(),
    ));
    let sentiment = Arc::new(StaticSentiment::default());
    let notifier: Arc<dyn Notifier> =
        match (&config.telegram_bot_token, &config.telegram_chat_id) {
            (Some(token), Some(chat_id)) => {
                info!("Telegram notifications enabled");
                Arc::new(TelegramNotifier::new(token.clone(), chat_id.clone()))
            }
            _ => {
                info!("Telegram not configured, notifications disabled");
                Arc::new(NoopNotifier)
            }
        };

    let auto_trading = config.enable_auto_trading;
    let symbols = vec![config.symbol.clone()];
    let interval_seconds = config.analysis_interval_seconds;

    let mut ctx =
        PipelineContext::new(config, market, sentiment, notifier).with_metrics(metrics.clone());
    if auto_trading {
        info!("Auto trading enabled, orders go to the paper executor");
        ctx = ctx.with_executor(Arc::new(PaperExecutor::new()));
    }
    let analyzer = Arc::new(Analyzer::new(Arc::new(ctx)));

    // Initialize and start scheduler
    info!("Starting analysis scheduler...");
    let scheduler = AnalysisScheduler::new(analyzer, symbols, interval_seconds)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler.start().await;

    // Graceful shutdown
    info!("Worker started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down worker...");
            scheduler.stop().await;
            info!("Worker stopped");
        }
    }

    Ok(())
}
