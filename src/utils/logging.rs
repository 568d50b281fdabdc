//! Structured logging and secret-scrubbing utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper that keeps
//! Gemini API keys out of logs.

use crate::config::LoggingConfig;
use crate::error::{GatewayError, Result};
use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    installed.map_err(|e| GatewayError::Internal(format!("Failed to install logger: {}", e)))
}

fn api_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Google API keys: "AIza" followed by 35 URL-safe characters
    PATTERN.get_or_init(|| Regex::new(r"AIza[0-9A-Za-z_\-]{35}").expect("valid regex"))
}

/// Replaces Google API keys in `input` with `[REDACTED_API_KEY]`.
///
/// Upstream error bodies sometimes echo the key back; run them through this
/// before logging.
pub fn sanitize(input: &str) -> String {
    let mut result = api_key_pattern()
        .replace_all(input, "[REDACTED_API_KEY]")
        .into_owned();

    // Keys passed as query parameters
    if let Some(pos) = result.find("key=") {
        let start = pos + "key=".len();
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        if end > start {
            result.replace_range(start..end, "[REDACTED]");
        }
    }

    result
}
