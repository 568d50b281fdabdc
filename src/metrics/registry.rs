// Prometheus metrics registry and collectors

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_gauge_with_registry,
    register_histogram_vec_with_registry, CounterVec, Encoder, Gauge, HistogramVec, Opts,
    Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // ROUTER METRICS
    // ============================================================================

    /// Resolved requests per route and outcome
    pub static ref GATEWAY_REQUESTS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("gateway_requests_total", "Total resolved inference requests"),
        &["route", "outcome"], // outcome: hit, miss, fallback
        REGISTRY
    ).unwrap();

    /// Accumulated cost estimate per route
    pub static ref ESTIMATED_COST: CounterVec = register_counter_vec_with_registry!(
        Opts::new("estimated_cost_total", "Accumulated cost estimate of backend calls"),
        &["route"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // BACKEND METRICS
    // ============================================================================

    /// Total backend calls
    pub static ref BACKEND_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("backend_calls_total", "Total generation backend calls"),
        &["model", "status"], // status: success, error, timeout
        REGISTRY
    ).unwrap();

    /// Backend call duration
    pub static ref BACKEND_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("backend_duration_seconds", "Generation backend call duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["model"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // CACHE METRICS
    // ============================================================================

    /// Cache operations
    pub static ref CACHE_OPERATIONS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("cache_operations_total", "Total cache operations"),
        &["operation"], // operation: hit, miss, expired, evicted, insert
        REGISTRY
    ).unwrap();

    /// Current cache entries
    pub static ref CACHE_ENTRIES: Gauge = register_gauge_with_registry!(
        Opts::new("cache_entries_current", "Current number of cache entries"),
        REGISTRY
    ).unwrap();

    // ============================================================================
    // CONNECTION METRICS
    // ============================================================================

    /// Overhead estimates handed out, by warmth
    pub static ref CONNECTION_OVERHEAD: CounterVec = register_counter_vec_with_registry!(
        Opts::new("connection_overhead_total", "Connection overhead estimates by warmth"),
        &["route", "warmth"], // warmth: cold, rewarm, warm
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        // Vec collectors only show up once a label set has been touched
        GATEWAY_REQUESTS.with_label_values(&["gemini-flash", "miss"]).inc();
        BACKEND_CALLS.with_label_values(&["gemini-3-flash-preview", "success"]).inc();
        CACHE_OPERATIONS.with_label_values(&["hit"]).inc();

        let metrics = gather_metrics();
        assert!(metrics.contains("gateway_requests_total"));
        assert!(metrics.contains("backend_calls_total"));
        assert!(metrics.contains("cache_operations_total"));
        assert!(metrics.contains("cache_entries_current"));
    }
}
