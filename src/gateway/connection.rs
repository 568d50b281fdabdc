// Connection warmth tracking per route
// Estimates connection-establishment overhead from how recently a route was used.

use crate::config::ConnectionConfig;
use crate::metrics;
use crate::models::RouteKind;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionWarmth {
    /// Route never used in this process.
    Cold,
    /// Route used before but idle past the threshold.
    Rewarm,
    Warm,
}

impl ConnectionWarmth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionWarmth::Cold => "cold",
            ConnectionWarmth::Rewarm => "rewarm",
            ConnectionWarmth::Warm => "warm",
        }
    }
}

/// Heuristic estimator; no real connections are held.
#[derive(Debug)]
pub struct ConnectionOptimizer {
    config: ConnectionConfig,
    last_active: RwLock<HashMap<RouteKind, Instant>>,
}

impl ConnectionOptimizer {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            last_active: RwLock::new(HashMap::new()),
        }
    }

    /// Stamp the current time against `route`.
    pub fn record_active(&self, route: RouteKind) {
        self.last_active.write().insert(route, Instant::now());
    }

    pub fn warmth(&self, route: RouteKind) -> ConnectionWarmth {
        let idle_threshold = Duration::from_secs(self.config.idle_threshold_secs);
        match self.last_active.read().get(&route) {
            None => ConnectionWarmth::Cold,
            Some(last) if last.elapsed() > idle_threshold => ConnectionWarmth::Rewarm,
            Some(_) => ConnectionWarmth::Warm,
        }
    }

    /// Overhead in milliseconds to add to reported latency for `route`.
    pub fn estimate_overhead(&self, route: RouteKind) -> u64 {
        let warmth = self.warmth(route);
        let overhead = match warmth {
            ConnectionWarmth::Cold => self.config.cold_overhead_ms,
            ConnectionWarmth::Rewarm => self.config.rewarm_overhead_ms,
            ConnectionWarmth::Warm => self.config.warm_overhead_ms,
        };

        debug!("Connection for {} is {} (+{}ms)", route, warmth.as_str(), overhead);
        metrics::record_connection_overhead(route.id(), warmth.as_str());
        overhead
    }
}

impl Default for ConnectionOptimizer {
    fn default() -> Self {
        Self::new(ConnectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cold_warm_rewarm() {
        let optimizer = ConnectionOptimizer::default();
        assert_eq!(optimizer.estimate_overhead(RouteKind::EdgeFast), 400);

        optimizer.record_active(RouteKind::EdgeFast);
        assert_eq!(optimizer.estimate_overhead(RouteKind::EdgeFast), 15);

        // Exactly at the threshold still counts as warm
        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(optimizer.warmth(RouteKind::EdgeFast), ConnectionWarmth::Warm);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(optimizer.estimate_overhead(RouteKind::EdgeFast), 250);

        optimizer.record_active(RouteKind::EdgeFast);
        assert_eq!(optimizer.estimate_overhead(RouteKind::EdgeFast), 15);
    }

    #[tokio::test(start_paused = true)]
    async fn test_routes_are_independent() {
        let optimizer = ConnectionOptimizer::default();
        optimizer.record_active(RouteKind::AcceleratedReasoning);
        assert_eq!(optimizer.warmth(RouteKind::AcceleratedReasoning), ConnectionWarmth::Warm);
        assert_eq!(optimizer.warmth(RouteKind::AcceleratedCreative), ConnectionWarmth::Cold);
    }
}
