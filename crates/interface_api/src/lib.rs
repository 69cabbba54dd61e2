//! HTTP API Layer
//!
//! This crate serves the claims review dashboard as JSON using Axum. Each
//! dashboard page has its own endpoint group.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each page
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(StaticCatalogAdapter::new()), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{ClaimsDataPort, DemoSimulator};

use crate::config::ApiConfig;
use crate::handlers::{claims, dashboard, demo, health, pipeline, viewer};
use crate::middleware::{audit_middleware, REQUEST_ID_HEADER};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimsDataPort>,
    pub config: ApiConfig,
    pub simulator: DemoSimulator,
}

impl AppState {
    pub fn new(claims: Arc<dyn ClaimsDataPort>, config: ApiConfig) -> Self {
        let simulator = DemoSimulator::new(config.demo_failure_rate);
        Self {
            claims,
            config,
            simulator,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `claims` - Source of claim records
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(claims: Arc<dyn ClaimsDataPort>, config: ApiConfig) -> Router {
    let state = AppState::new(claims, config);
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims table and detail page
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:id", get(claims::get_claim))
        .route("/:id/review", post(claims::review_claim));

    // Pipeline board and drawer
    let pipeline_routes = Router::new()
        .route("/", get(pipeline::get_board))
        .route("/:id", get(pipeline::get_drawer));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/pipeline", pipeline_routes)
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/demo/submissions", post(demo::submit_claim))
        .route("/viewer/events", post(viewer::apply_events))
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
