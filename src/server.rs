//! Server initialization and routing
//!
//! Axum server setup: router configuration, middleware stack (request IDs,
//! logging, timeout, compression, CORS), and graceful shutdown handling.

use crate::config::ServiceConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{analyze, api_info, health, not_found};
use crate::state::AppState;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware.
///
/// Public (there is no authentication surface): `/`, `/health`, and the
/// single analysis endpoint `/analyze`.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/analyze", post(analyze::analyze_text))
        .fallback(not_found)
        .layer(TimeoutLayer::new(state.config.timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
///
/// Initializes structured logging, builds the shared state (configuration
/// plus the analysis pipeline with its capability backends), binds the
/// configured TCP address, and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServiceConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .json()
        .init();

    let addr: SocketAddr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    tracing::info!("Starting textlens on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
