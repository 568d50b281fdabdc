// Response cache module

pub mod manager;
pub mod models;

pub use manager::InferenceCache;
pub use models::{normalize, CacheConfig, CacheKey, CacheStats};
