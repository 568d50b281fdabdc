//! Cache configuration, keys and statistics.

use crate::config::CacheSettings;
use crate::models::RouteKind;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Configuration for the response cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Whether caching is enabled.
    pub enabled: bool,
    /// How long an entry stays servable after insertion.
    pub ttl: Duration,
    /// Maximum number of entries held at once.
    pub max_entries: NonZeroUsize,
}

impl Default for CacheConfig {
    /// Provides default values for cache configuration.
    ///
    /// - `enabled`: true
    /// - `ttl`: 20 minutes
    /// - `max_entries`: 50
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(20 * 60),
            max_entries: NonZeroUsize::new(50).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl From<&CacheSettings> for CacheConfig {
    fn from(settings: &CacheSettings) -> Self {
        Self {
            enabled: settings.enabled,
            ttl: Duration::from_secs(settings.ttl_minutes.saturating_mul(60)),
            max_entries: NonZeroUsize::new(settings.max_entries).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Cache key: route identifier plus a digest of the normalized message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    route: &'static str,
    digest: String,
}

impl CacheKey {
    /// Build a key from the route and the raw message. The message is trimmed
    /// and lower-cased before hashing.
    pub fn new(route: RouteKind, message: &str) -> Self {
        let normalized = normalize(message);
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());

        Self {
            route: route.id(),
            digest: hex::encode(hasher.finalize()),
        }
    }

    pub fn route(&self) -> &'static str {
        self.route
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.route, &self.digest[..16])
    }
}

/// Normalized form used for cache keys.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Statistics for cache operations.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that found nothing servable (including expired entries).
    pub misses: u64,
    /// Entries written.
    pub inserts: u64,
    /// Entries dropped to make room for a new key.
    pub evictions: u64,
    /// Entries dropped because their TTL had passed.
    pub expirations: u64,
}
