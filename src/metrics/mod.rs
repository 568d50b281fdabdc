// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics,
    BACKEND_CALLS,
    BACKEND_DURATION,
    CACHE_ENTRIES,
    CACHE_OPERATIONS,
    CONNECTION_OVERHEAD,
    ESTIMATED_COST,
    GATEWAY_REQUESTS,
};

/// Helper to record a resolved request
pub fn record_request(route: &str, outcome: &str) {
    GATEWAY_REQUESTS.with_label_values(&[route, outcome]).inc();
}

/// Helper to record backend call metrics
pub fn record_backend_call(model: &str, status: &str, duration_secs: f64) {
    BACKEND_CALLS.with_label_values(&[model, status]).inc();
    BACKEND_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}

pub fn record_cost(route: &str, cost: f64) {
    if cost > 0.0 {
        ESTIMATED_COST.with_label_values(&[route]).inc_by(cost);
    }
}

/// Helper to record cache operations
pub fn record_cache_operation(operation: &str) {
    CACHE_OPERATIONS.with_label_values(&[operation]).inc();
}

pub fn update_cache_entries(count: usize) {
    CACHE_ENTRIES.set(count as f64);
}

pub fn record_connection_overhead(route: &str, warmth: &str) {
    CONNECTION_OVERHEAD.with_label_values(&[route, warmth]).inc();
}
