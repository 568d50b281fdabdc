// inference-gateway - cost-aware inference router with a TTL/LRU response cache

use anyhow::Result;
use clap::Parser;
use inference_gateway::cli::Args;
use inference_gateway::config::AppConfig;
use inference_gateway::gateway::InferenceRouter;
use inference_gateway::gemini::GeminiClient;
use inference_gateway::server::create_router;
use inference_gateway::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting inference-gateway v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the backend and router
    let backend = GeminiClient::new(&config.gemini)?;
    if !backend.has_api_key() {
        warn!("No Gemini API key configured; requests will resolve to the fallback response");
    }
    info!("Gemini API base: {}", backend.base_url());

    let router = Arc::new(InferenceRouter::from_config(&config, Arc::new(backend)));
    info!(
        "Router ready (cache ttl={}m, capacity={})",
        config.cache.ttl_minutes, config.cache.max_entries
    );

    // One-shot mode
    if let Some(message) = args.message {
        let result = router.resolve(&message, args.boost, args.throughput).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, router);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
