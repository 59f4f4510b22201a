//! The run-once analysis orchestrator.
//!
//! Each evaluator is fenced at its boundary: an upstream failure or
//! malformed input skips that evaluator with a logged warning, and the run
//! continues with whichever evaluators succeeded. Only when every evaluator
//! is skipped does the run produce an `Error` decision. `run_once` always
//! returns a `Decision`; callers never need error handling around it.

use crate::error::EngineError;
use crate::indicators::compute_indicators;
use crate::models::{Candle, Decision, IndicatorFrame, SignalDirection, SignalVote, Verdict};
use crate::pipeline::context::PipelineContext;
use crate::services::notifier::render_decision;
use crate::signals::{
    aggregate, evaluate_correlation, evaluate_sentiment, evaluate_technical, evaluate_whales,
    price_targets,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

const EVALUATOR_COUNT: usize = 4;

pub struct Analyzer {
    ctx: Arc<PipelineContext>,
}

impl Analyzer {
    pub fn new(ctx: Arc<PipelineContext>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Arc<PipelineContext> {
        &self.ctx
    }

    /// Run the full pipeline once for a symbol and append the decision to
    /// the shared history.
    pub async fn run_once(&self, symbol: &str) -> Decision {
        let start = Instant::now();
        if let Some(ref metrics) = self.ctx.metrics {
            metrics.analysis_runs_active.inc();
        }

        let decision = self.evaluate(symbol).await;

        self.ctx.history.append(decision.clone()).await;

        if let Some(ref metrics) = self.ctx.metrics {
            metrics.analysis_runs_total.inc();
            metrics
                .analysis_duration_seconds
                .observe(start.elapsed().as_secs_f64());
            metrics.analysis_runs_active.dec();
            if decision.verdict == Verdict::Error {
                metrics.decisions_error_total.inc();
            }
        }

        self.dispatch(&decision).await;
        decision
    }

    async fn evaluate(&self, symbol: &str) -> Decision {
        let config = &self.ctx.config;
        let mut votes: Vec<SignalVote> = Vec::new();
        let mut failures = 0usize;

        // Technical: candle fetch, validation, and the indicator frame.
        let (candles, frame) = match self.fetch_frame(symbol).await {
            Ok((candles, frame)) => {
                votes.push(evaluate_technical(&frame));
                (Some(candles), Some(frame))
            }
            Err(reason) => {
                warn!(symbol = %symbol, reason = %reason, "technical evaluator skipped");
                failures += 1;
                (None, None)
            }
        };

        // Correlation against the reference asset.
        match &candles {
            Some(primary) => {
                match self
                    .ctx
                    .market
                    .get_candles(&config.reference_symbol, config.candle_limit)
                    .await
                {
                    Ok(reference) => {
                        let primary_closes: Vec<f64> = primary.iter().map(|c| c.close).collect();
                        let reference_closes: Vec<f64> =
                            reference.iter().map(|c| c.close).collect();
                        votes.push(evaluate_correlation(&primary_closes, &reference_closes));
                    }
                    Err(e) => {
                        warn!(
                            symbol = %config.reference_symbol,
                            error = %e,
                            "correlation evaluator skipped: reference data unavailable"
                        );
                        failures += 1;
                    }
                }
            }
            None => {
                warn!(symbol = %symbol, "correlation evaluator skipped: no primary series");
                failures += 1;
            }
        }

        // Large-trade detection.
        match self
            .ctx
            .market
            .get_recent_trades(symbol, config.trade_limit)
            .await
        {
            Ok(trades) => votes.push(evaluate_whales(&trades, config.whale_notional_threshold)),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "whale evaluator skipped: trades unavailable");
                failures += 1;
            }
        }

        // Sentiment.
        match self.ctx.sentiment.get_sentiment(symbol).await {
            Ok(snapshot) => votes.push(evaluate_sentiment(&snapshot)),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "sentiment evaluator skipped");
                failures += 1;
            }
        }

        if let Some(ref metrics) = self.ctx.metrics {
            for _ in 0..failures {
                metrics.evaluator_failures_total.inc();
            }
        }

        if failures == EVALUATOR_COUNT {
            error!(symbol = %symbol, "all evaluators failed, emitting error decision");
            return Decision::error(symbol);
        }

        let (direction, confidence) = aggregate(&votes);
        let verdict = Verdict::from(direction);

        let reference_price = self.reference_price(symbol, candles.as_deref()).await;
        let atr = frame.as_ref().and_then(frame_atr);
        let (price_target, stop_loss) = price_targets(verdict, reference_price, atr);

        info!(
            symbol = %symbol,
            verdict = ?verdict,
            confidence = confidence,
            price = reference_price,
            "analysis complete"
        );

        Decision {
            symbol: symbol.to_string(),
            verdict,
            confidence,
            reference_price,
            price_target,
            stop_loss,
            votes,
            generated_at: Utc::now(),
        }
    }

    async fn fetch_frame(&self, symbol: &str) -> Result<(Vec<Candle>, IndicatorFrame), EngineError> {
        let candles = self
            .ctx
            .market
            .get_candles(symbol, self.ctx.config.candle_limit)
            .await
            .map_err(|e| EngineError::UpstreamUnavailable(e.to_string()))?;
        let frame = compute_indicators(&candles)?;
        Ok((candles, frame))
    }

    /// Current price from the ticker, falling back to the last close.
    async fn reference_price(&self, symbol: &str, candles: Option<&[Candle]>) -> f64 {
        match self.ctx.market.get_latest_price(symbol).await {
            Ok(price) if price.is_finite() && price > 0.0 => price,
            Ok(_) | Err(_) => candles
                .and_then(|series| series.last())
                .map(|c| c.close)
                .unwrap_or(0.0),
        }
    }

    /// Notification and order placement for actionable decisions. Failures
    /// here are logged and never propagated into the pipeline result.
    async fn dispatch(&self, decision: &Decision) {
        let config = &self.ctx.config;
        let actionable = matches!(decision.verdict, Verdict::Buy | Verdict::Sell)
            && decision.confidence >= config.signal_threshold;

        if !actionable {
            debug!(
                symbol = %decision.symbol,
                verdict = ?decision.verdict,
                confidence = decision.confidence,
                "decision below notification threshold"
            );
            return;
        }

        if let Err(e) = self.ctx.notifier.send(&render_decision(decision)).await {
            warn!(symbol = %decision.symbol, error = %e, "notification delivery failed");
        }

        if config.enable_auto_trading {
            if let Some(ref executor) = self.ctx.executor {
                let direction = match decision.verdict {
                    Verdict::Buy => SignalDirection::Buy,
                    Verdict::Sell => SignalDirection::Sell,
                    _ => return,
                };
                match executor
                    .place_order(
                        &decision.symbol,
                        direction,
                        config.order_quantity,
                        decision.reference_price,
                    )
                    .await
                {
                    Ok(fill) => info!(
                        symbol = %decision.symbol,
                        order_id = %fill.order_id,
                        price = fill.price,
                        quantity = fill.quantity,
                        "order filled"
                    ),
                    Err(e) => warn!(symbol = %decision.symbol, error = %e, "order placement failed"),
                }
            }
        }
    }
}

fn frame_atr(frame: &IndicatorFrame) -> Option<f64> {
    frame.latest().and_then(|row| row.atr)
}
