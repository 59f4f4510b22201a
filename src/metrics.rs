//! Prometheus metrics for the HTTP surface and the evaluation pipeline.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub analysis_runs_total: IntCounter,
    pub analysis_runs_active: IntGauge,
    pub analysis_duration_seconds: Histogram,
    pub evaluator_failures_total: IntCounter,
    pub decisions_error_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests handled")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;
        let analysis_runs_total =
            IntCounter::new("analysis_runs_total", "Completed analysis pipeline runs")?;
        let analysis_runs_active =
            IntGauge::new("analysis_runs_active", "Analysis runs currently executing")?;
        let analysis_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "analysis_duration_seconds",
            "Analysis pipeline run duration",
        ))?;
        let evaluator_failures_total = IntCounter::new(
            "evaluator_failures_total",
            "Evaluators skipped due to upstream failures",
        )?;
        let decisions_error_total = IntCounter::new(
            "decisions_error_total",
            "Runs where every evaluator failed",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(analysis_runs_total.clone()))?;
        registry.register(Box::new(analysis_runs_active.clone()))?;
        registry.register(Box::new(analysis_duration_seconds.clone()))?;
        registry.register(Box::new(evaluator_failures_total.clone()))?;
        registry.register(Box::new(decisions_error_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            analysis_runs_total,
            analysis_runs_active,
            analysis_duration_seconds,
            evaluator_failures_total,
            decisions_error_total,
        })
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
