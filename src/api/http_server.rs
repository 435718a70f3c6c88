use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    analyze_handler, autocomplete_handler, health_handler, index_meta_handler,
    semantic_search_handler, text_search_handler,
};
use crate::embedding::Embedder;
use crate::engine::SearchEngine;

/// Shared handler state: explicitly constructed clients, no globals
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn SearchEngine>,
    pub embedder: Arc<dyn Embedder>,
    /// Index search requests run against
    pub index: String,
}

/// Build the gateway router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search/text", post(text_search_handler))
        .route("/v1/search/semantic", post(semantic_search_handler))
        .route("/v1/search/autocomplete", post(autocomplete_handler))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/indices/:index", get(index_meta_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve the router until ctrl-c
pub async fn start_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("search gateway listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
