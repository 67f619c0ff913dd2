// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! The engine is stateless and request-scoped, so handlers call it directly
//! through shared state; there is no actor loop between the HTTP layer and
//! the orchestration.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use navigator_config::GatewayConfig;
use navigator_core::NavigatorError;
use navigator_engine::NavigatorEngine;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The orchestration engine, shared read-only.
    pub engine: Arc<NavigatorEngine>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

/// Build the gateway router.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/navigator", post(handlers::post_navigator))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(
    config: &GatewayConfig,
    engine: Arc<NavigatorEngine>,
) -> Result<(), NavigatorError> {
    let state = GatewayState {
        engine,
        start_time: Instant::now(),
    };
    let app = router(state);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| NavigatorError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Navigator gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| NavigatorError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
