// inference-gateway - cost-aware inference router with a TTL/LRU response cache

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod metrics;
pub mod models;
pub mod server;
pub mod utils;
