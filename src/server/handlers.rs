// HTTP request handlers

use super::routes::AppState;
use crate::cache::CacheStats;
use crate::error::GatewayError;
use crate::metrics::gather_metrics;
use crate::models::{routing_matrix, InferenceResult, RouteEntry};
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Body of `POST /v1/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub boosted: bool,
    #[serde(default)]
    pub throughput: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend_configured: bool,
    pub cache_entries: usize,
    pub cache_capacity: usize,
    pub cache: CacheStats,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.router.cache();
    let backend_configured = !state.config.gemini.api_key.is_empty();

    Json(HealthResponse {
        status: if backend_configured { "healthy" } else { "degraded" },
        backend_configured,
        cache_entries: cache.len(),
        cache_capacity: cache.capacity(),
        cache: cache.stats(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for /v1/chat
pub async fn chat_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<InferenceResult>, GatewayError> {
    let req: ChatRequest = serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to deserialize request: {}", e);
        GatewayError::InvalidInput(format!("JSON deserialization error: {}", e))
    })?;

    info!(
        "Received chat request: chars={}, boosted={}",
        req.message.chars().count(),
        req.boosted
    );

    let result = state
        .router
        .resolve(&req.message, req.boosted, req.throughput)
        .await?;

    info!(
        "Resolved via {} (cached={}, latency={}ms)",
        result.model_used, result.metrics.cached, result.metrics.total_latency_ms
    );

    Ok(Json(result))
}

pub async fn routes_handler() -> Json<Vec<RouteEntry>> {
    Json(routing_matrix())
}

pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        gather_metrics(),
    )
}
