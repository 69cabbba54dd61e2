//! Claims Review Dashboard - API Server Binary
//!
//! This binary starts the HTTP API server for the claims review dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-review-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_DEMO_LATENCY_MS=500 cargo run --bin claims-review-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_DEMO_LATENCY_MS` - Demo processing delay in milliseconds (default: 2000)
//! * `API_DEMO_FAILURE_RATE` - Probability of a simulated demo failure (default: 0)
//! * `API_DISPLAY_TIMEZONE` - IANA timezone for rendered timestamps (default: Asia/Kathmandu)

use std::net::SocketAddr;
use std::sync::Arc;

use core_kernel::HealthCheckable;
use domain_claims::{ClaimsDataPort, StaticCatalogAdapter};
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, checks the claims data source
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.display_timezone.0.name(),
        demo_latency_ms = config.demo_latency_ms,
        "Starting Claims Review API Server"
    );

    let claims: Arc<dyn ClaimsDataPort> = Arc::new(StaticCatalogAdapter::new());
    let health = claims.health_check();
    if !health.healthy {
        tracing::warn!(source = %health.source, message = ?health.message, "Claims data source unhealthy");
    }

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_router(claims, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
