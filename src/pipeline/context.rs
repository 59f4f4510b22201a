//! Pipeline context for dependency injection.

use crate::config::Config;
use crate::history::DecisionHistory;
use crate::metrics::Metrics;
use crate::services::execution::OrderExecutor;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::Notifier;
use crate::services::sentiment::SentimentProvider;
use std::sync::Arc;

/// Everything a pipeline run needs, owned explicitly by the caller.
///
/// Collaborators are trait objects so the same runner serves production
/// (Binance + Telegram) and tests (static providers) unchanged. The history
/// is the only shared-mutable member.
pub struct PipelineContext {
    pub config: Config,
    pub market: Arc<dyn MarketDataProvider>,
    pub sentiment: Arc<dyn SentimentProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub executor: Option<Arc<dyn OrderExecutor>>,
    pub history: Arc<DecisionHistory>,
    pub metrics: Option<Arc<Metrics>>,
}

impl PipelineContext {
    pub fn new(
        config: Config,
        market: Arc<dyn MarketDataProvider>,
        sentiment: Arc<dyn SentimentProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let history = Arc::new(DecisionHistory::new(config.history_capacity));
        Self {
            config,
            market,
            sentiment,
            notifier,
            executor: None,
            history,
            metrics: None,
        }
    }

    pub fn with_executor(mut self, executor: Arc<dyn OrderExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}
