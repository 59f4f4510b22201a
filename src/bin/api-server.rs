//! Quantrix API Server
//!
//! HTTP API with health check, metrics, and decision endpoints. Analysis
//! runs only on demand here (POST /api/analyze); the worker binary owns the
//! scheduled loop.

use dotenvy::dotenv;
use quantrix::config::Config;
use quantrix::core::http::{start_server, AppState};
use quantrix::logging;
use quantrix::metrics::Metrics;
use quantrix::pipeline::{Analyzer, PipelineContext};
use quantrix::services::{
    BinanceMarketData, NoopNotifier, Notifier, StaticSentiment, TelegramNotifier,
};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let config = Config::from_env();
    let env = quantrix::config::get_environment();
    let port = config.http_port;
    info!("Starting Quantrix API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

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

    let ctx = Arc::new(
        PipelineContext::new(config, market, sentiment, notifier).with_metrics(metrics.clone()),
    );
    let analyzer = Arc::new(Analyzer::new(ctx));
    let state = AppState::new(analyzer, metrics);

    // Start HTTP server
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(state, port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    // Graceful shutdown
    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
