//! One-shot analysis CLI.
//!
//! Runs the full pipeline once for the configured symbol and prints the
//! decision as JSON. Useful for sanity checks before deploying the worker.

use dotenvy::dotenv;
use quantrix::config::Config;
use quantrix::logging;
use quantrix::pipeline::{Analyzer, PipelineContext};
use quantrix::services::{
    BinanceMarketData, NoopNotifier, Notifier, StaticSentiment, TelegramNotifier,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    info!(symbol = %config.symbol, interval = %config.interval, "running one-shot analysis");

    let market = Arc::new(BinanceMarketData::new(
        config.binance_base_url.clone(),
        config.interval.clone(),
    ));
    let sentiment = Arc::new(StaticSentiment::default());
    let notifier: Arc<dyn Notifier> =
        match (&config.telegram_bot_token, &config.telegram_chat_id) {
            (Some(token), Some(chat_id)) => {
                Arc::new(TelegramNotifier::new(token.clone(), chat_id.clone()))
            }
            _ => Arc::new(NoopNotifier),
        };

    let symbol = config.symbol.clone();
    let ctx = Arc::new(PipelineContext::new(config, market, sentiment, notifier));
    let analyzer = Analyzer::new(ctx);

    let decision = analyzer.run_once(&symbol).await;
    println!("{}", serde_json::to_string_pretty(&decision)?);

    Ok(())
}
