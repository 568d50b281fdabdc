//! Axum-based HTTP server for the inference gateway.
//!
//! # Components
//!
//! - `handlers`: Endpoint implementations (chat, routes, health, metrics).
//! - `middleware`: Request ID tracking layers.
//! - `routes`: The router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::{ChatRequest, HealthResponse};
pub use routes::{create_router, AppState};
