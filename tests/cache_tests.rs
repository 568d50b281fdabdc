// Cache tests - public API only

use inference_gateway::cache::{CacheConfig, CacheKey, InferenceCache};
use inference_gateway::config::CacheSettings;
use inference_gateway::models::{InferenceMetrics, InferenceResult, RouteKind};
use std::time::Duration;

fn result(text: &str) -> InferenceResult {
    InferenceResult {
        text: text.to_string(),
        metrics: InferenceMetrics {
            ttft_ms: 20.0,
            total_latency_ms: 120,
            cached: false,
            accelerated: false,
            provider: "Google".to_string(),
            cluster: "EDGE-TPU-NODE".to_string(),
            throughput: 120.0,
        },
        tool_calls: vec![],
        cost: 0.0,
        model_used: "Gemini 3 Flash".to_string(),
    }
}

#[test]
fn test_cache_stats_initialization() {
    let cache = InferenceCache::new(CacheConfig::default());
    let stats = cache.stats();

    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.inserts, 0);
    assert_eq!(stats.evictions, 0);
    assert!(cache.is_empty());
}

#[test]
fn test_cache_config_defaults() {
    let config = CacheConfig::default();

    assert_eq!(config.ttl, Duration::from_secs(20 * 60));
    assert_eq!(config.max_entries.get(), 50);
    assert!(config.enabled);
}

#[test]
fn test_cache_config_from_settings_defaults() {
    let config = CacheConfig::from(&CacheSettings::default());
    assert_eq!(config.ttl, Duration::from_secs(20 * 60));
    assert_eq!(config.max_entries.get(), 50);
}

#[tokio::test(start_paused = true)]
async fn test_overflow_by_one_drops_exactly_one_entry() {
    let cache = InferenceCache::new(CacheConfig::default());
    let capacity = cache.capacity();

    for i in 0..=capacity {
        cache.insert(CacheKey::new(RouteKind::EdgeFast, &format!("message {}", i)), result("x"));
    }

    assert_eq!(cache.len(), capacity);
    let missing: Vec<usize> = (0..=capacity)
        .filter(|i| !cache.contains(&CacheKey::new(RouteKind::EdgeFast, &format!("message {}", i))))
        .collect();
    assert_eq!(missing, vec![0]);
    assert_eq!(cache.stats().evictions, 1);
}

#[tokio::test(start_paused = true)]
async fn test_hit_returns_independent_copy() {
    let cache = InferenceCache::new(CacheConfig::default());
    let key = CacheKey::new(RouteKind::EdgeFast, "hi");
    cache.insert(key.clone(), result("hello"));

    let mut copy = cache.get(&key).unwrap();
    copy.metrics.cached = true;
    copy.metrics.total_latency_ms = 15;

    let stored = cache.get(&key).unwrap();
    assert!(!stored.metrics.cached);
    assert_eq!(stored.metrics.total_latency_ms, 120);
}
