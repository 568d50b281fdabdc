//! Configuration data structures for the inference gateway.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the upstream Gemini backend, the response cache, the routing
//! heuristics and the connection warmth estimator.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Response cache settings.
    #[serde(default)]
    pub cache: CacheSettings,

    /// Route selection and sampling settings.
    #[serde(default)]
    pub router: RouterConfig,

    /// Connection warmth overhead estimates.
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream Gemini API connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL for the Gemini API.
    /// Default: `https://generativelanguage.googleapis.com/v1beta`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API key sent as `x-goog-api-key`. Falls back to `GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// TCP connect timeout in seconds.
    /// Default: `10`
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Maximum number of idle connections kept per host.
    /// Default: `10`
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

/// Settings for the in-memory response cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Whether responses are cached at all.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Time-to-live of a cached response, in minutes.
    /// Default: `20`
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: u64,

    /// Maximum number of cached responses.
    /// Default: `50`
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// Settings for complexity classification and backend sampling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Messages longer than this many characters are classified as complex.
    /// Default: `60`
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: usize,

    /// Case-insensitive keywords that mark a message as complex.
    /// Default: `["analyze"]`
    #[serde(default = "default_analysis_keywords")]
    pub analysis_keywords: Vec<String>,

    /// Throughput figure (TFLOPS) used when the caller gives no hint.
    /// Default: `120.0`
    #[serde(default = "default_throughput")]
    pub default_throughput: f64,

    /// Sampling temperature for boosted requests.
    /// Default: `0.7`
    #[serde(default = "default_boosted_temperature")]
    pub boosted_temperature: f32,

    /// Sampling temperature for edge requests.
    /// Default: `0.3`
    #[serde(default = "default_edge_temperature")]
    pub edge_temperature: f32,

    /// Thinking token budget for boosted requests. Edge requests always use `0`.
    /// Default: `16384`
    #[serde(default = "default_thinking_budget")]
    pub boosted_thinking_budget: u32,

    /// Upper bound on a single backend call, in milliseconds.
    /// Default: `10000`
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// District identifiers listed in the system instruction.
    #[serde(default = "default_districts")]
    pub districts: Vec<String>,
}

/// Overhead estimates for cold, re-warmed and warm connections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Overhead for a route that has never been used.
    /// Default: `400`
    #[serde(default = "default_cold_overhead")]
    pub cold_overhead_ms: u64,

    /// Overhead for a route idle longer than `idle_threshold_secs`.
    /// Default: `250`
    #[serde(default = "default_rewarm_overhead")]
    pub rewarm_overhead_ms: u64,

    /// Overhead for a recently used route.
    /// Default: `15`
    #[serde(default = "default_warm_overhead")]
    pub warm_overhead_ms: u64,

    /// Idle time after which a connection counts as cooled down.
    /// Default: `60`
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold_secs: u64,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            connect_timeout_seconds: default_connect_timeout(),
            pool_size: default_pool_size(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_minutes: default_ttl_minutes(),
            max_entries: default_max_entries(),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            analysis_keywords: default_analysis_keywords(),
            default_throughput: default_throughput(),
            boosted_temperature: default_boosted_temperature(),
            edge_temperature: default_edge_temperature(),
            boosted_thinking_budget: default_thinking_budget(),
            request_timeout_ms: default_request_timeout(),
            districts: default_districts(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            cold_overhead_ms: default_cold_overhead(),
            rewarm_overhead_ms: default_rewarm_overhead(),
            warm_overhead_ms: default_warm_overhead(),
            idle_threshold_secs: default_idle_threshold(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_pool_size() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_ttl_minutes() -> u64 {
    20
}

fn default_max_entries() -> usize {
    50
}

fn default_complexity_threshold() -> usize {
    60
}

fn default_analysis_keywords() -> Vec<String> {
    vec!["analyze".to_string()]
}

fn default_throughput() -> f64 {
    120.0
}

fn default_boosted_temperature() -> f32 {
    0.7
}

fn default_edge_temperature() -> f32 {
    0.3
}

fn default_thinking_budget() -> u32 {
    16384
}

fn default_request_timeout() -> u64 {
    10_000
}

fn default_districts() -> Vec<String> {
    ["DEV", "DATA", "AI", "OPS", "GROWTH", "COMMERCE", "COLLAB"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}

fn default_cold_overhead() -> u64 {
    400
}

fn default_rewarm_overhead() -> u64 {
    250
}

fn default_warm_overhead() -> u64 {
    15
}

fn default_idle_threshold() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
