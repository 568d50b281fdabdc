// Cache manager - TTL-bounded LRU store for inference results

use crate::cache::models::{CacheConfig, CacheKey, CacheStats};
use crate::metrics;
use crate::models::InferenceResult;
use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug)]
struct CacheEntry {
    result: InferenceResult,
    /// `None` when `now + ttl` is past what `Instant` can represent.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

struct Inner {
    entries: LruCache<CacheKey, CacheEntry>,
    stats: CacheStats,
}

/// In-memory response cache.
///
/// Entries expire `ttl` after insertion. A successful lookup moves the entry
/// to the most-recently-used position; when the cache is full the least
/// recently touched entry is dropped to make room. Whichever of the two
/// happens first removes the entry.
///
/// Time is read from `tokio::time::Instant`, so a paused test runtime can
/// advance it.
pub struct InferenceCache {
    config: CacheConfig,
    inner: Mutex<Inner>,
}

impl InferenceCache {
    /// Create a new cache
    pub fn new(config: CacheConfig) -> Self {
        let entries = LruCache::new(config.max_entries);
        Self {
            config,
            inner: Mutex::new(Inner {
                entries,
                stats: CacheStats::default(),
            }),
        }
    }

    /// Look up a result. Expired entries are removed and reported as a miss.
    pub fn get(&self, key: &CacheKey) -> Option<InferenceResult> {
        if !self.config.enabled {
            return None;
        }

        let now = Instant::now();
        let mut inner = self.inner.lock();

        // `get` promotes the entry to most-recently-used
        let lookup = inner
            .entries
            .get(key)
            .map(|entry| entry.is_live(now).then(|| entry.result.clone()));

        match lookup {
            Some(Some(result)) => {
                debug!("Cache hit: {}", key);
                inner.stats.hits += 1;
                metrics::record_cache_operation("hit");
                Some(result)
            }
            Some(None) => {
                debug!("Cache entry expired: {}", key);
                inner.entries.pop(key);
                inner.stats.expirations += 1;
                inner.stats.misses += 1;
                metrics::record_cache_operation("expired");
                metrics::record_cache_operation("miss");
                metrics::update_cache_entries(inner.entries.len());
                None
            }
            None => {
                debug!("Cache miss: {}", key);
                inner.stats.misses += 1;
                metrics::record_cache_operation("miss");
                None
            }
        }
    }

    /// Store a result with `expiry = now + ttl`. A TTL too large to add to the
    /// clock never expires. At capacity, the least
    /// recently touched entry is evicted first. Re-inserting an existing key
    /// replaces it without evicting anything else.
    pub fn insert(&self, key: CacheKey, result: InferenceResult) {
        if !self.config.enabled {
            return;
        }

        let entry = CacheEntry {
            result,
            expires_at: Instant::now().checked_add(self.config.ttl),
        };

        let mut inner = self.inner.lock();
        let inserted = key.clone();

        if let Some((old_key, _)) = inner.entries.push(key, entry) {
            if old_key != inserted {
                debug!("Evicted least recently used entry: {}", old_key);
                inner.stats.evictions += 1;
                metrics::record_cache_operation("evicted");
            }
        }

        inner.stats.inserts += 1;
        metrics::record_cache_operation("insert");
        metrics::update_cache_entries(inner.entries.len());
        debug!("Cached result: {}", inserted);
    }

    /// Whether `key` is held and still servable. Does not touch recency.
    pub fn contains(&self, key: &CacheKey) -> bool {
        let now = Instant::now();
        self.inner
            .lock()
            .entries
            .peek(key)
            .is_some_and(|entry| entry.is_live(now))
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.config.max_entries.get()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats.clone()
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        metrics::update_cache_entries(0);
        debug!("Cache cleared");
    }
}
