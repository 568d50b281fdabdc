// HTTP routes configuration

use super::handlers::{chat_handler, health_handler, metrics_handler, routes_handler};
use super::middleware::request_id_layers;
use crate::config::AppConfig;
use crate::gateway::InferenceRouter;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub router: Arc<InferenceRouter>,
}

pub fn create_router(config: AppConfig, router: Arc<InferenceRouter>) -> Router {
    let state = AppState {
        config: Arc::new(config),
        router,
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/v1/chat", post(chat_handler))
        .route("/v1/routes", get(routes_handler))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(propagate_request_id)
                .layer(TraceLayer::new_for_http())
                // Chat messages are short; cap bodies at 1MB
                .layer(RequestBodyLimitLayer::new(1024 * 1024)),
        )
        .with_state(state)
}
