//! HTTP endpoint server using Axum.

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::metrics::Metrics;
use crate::models::Decision;
use crate::pipeline::Analyzer;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>, metrics: Arc<Metrics>) -> Self {
        Self {
            analyzer,
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "quantrix-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct DecisionsQuery {
    limit: Option<usize>,
}

/// Bot status: configuration snapshot plus the last analysis timestamp.
async fn get_status(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let ctx = state.analyzer.context();
    let last = ctx.history.latest().await;
    Ok(Json(json!({
        "symbol": ctx.config.symbol,
        "reference_symbol": ctx.config.reference_symbol,
        "interval": ctx.config.interval,
        "analysis_interval_seconds": ctx.config.analysis_interval_seconds,
        "signal_threshold": ctx.config.signal_threshold,
        "auto_trading": ctx.config.enable_auto_trading,
        "decision_count": ctx.history.len().await,
        "last_analysis": last.map(|d| d.generated_at),
    })))
}

/// List recent decisions, oldest first.
async fn list_decisions(
    State(state): State<AppState>,
    Query(params): Query<DecisionsQuery>,
) -> Result<Json<Vec<Decision>>, StatusCode> {
    let limit = params.limit.unwrap_or(100);
    let decisions = state.analyzer.context().history.recent(limit).await;
    Ok(Json(decisions))
}

/// Latest decision, if any run has completed.
async fn latest_decision(State(state): State<AppState>) -> Result<Json<Decision>, StatusCode> {
    state
        .analyzer
        .context()
        .history
        .latest()
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Trigger one analysis run for the configured symbol and return the
/// decision. Safe to call concurrently with the scheduled loop.
async fn run_analysis(State(state): State<AppState>) -> Json<Decision> {
    let symbol = state.analyzer.context().config.symbol.clone();
    let decision = state.analyzer.run_once(&symbol).await;
    Json(decision)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/status", get(get_status))
        .route("/api/decisions", get(list_decisions))
        .route("/api/decisions/latest", get(latest_decision))
        .route("/api/analyze", post(run_analysis))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    state: AppState,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
