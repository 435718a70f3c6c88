// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Endpoint handlers
//!
//! Each handler validates its request, builds a query body, forwards it to
//! the injected clients, and wraps the raw engine response.

use axum::{
    extract::{Path, State},
    Json,
};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::errors::ApiError;
use super::http_server::AppState;
use super::request::{AnalyzeRequest, SearchRequest};
use super::response::{AnalyzeResponse, HealthResponse, IndexMetaResponse, SearchResponse};
use crate::engine::query;

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        index: state.index.clone(),
        embedding_configured: state.embedder.is_configured(),
        embedding_model: state.embedder.model_id().to_string(),
    })
}

/// POST /v1/search/text - lexical multi-match search with optional filters
pub async fn text_search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    request.validate()?;
    let start = Instant::now();

    let body = query::text_search(request.trimmed_query(), &request.filters, request.size);
    let output = state.engine.search(&state.index, body).await?;

    let took_ms = start.elapsed().as_millis() as u64;
    info!(query = %request.query, took_ms, "text search complete");

    Ok(Json(SearchResponse::new(
        request.query,
        state.index.clone(),
        output,
        took_ms,
    )))
}

/// POST /v1/search/semantic - embed the query, then k-NN search
pub async fn semantic_search_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    request.validate()?;
    let start = Instant::now();

    let vector = state
        .embedder
        .embed(request.trimmed_query())
        .await
        .map_err(|e| {
            warn!(query = %request.query, error = %e, "embedding failed");
            e
        })?;
    debug!(dimensions = vector.len(), "query embedded");

    let body = query::knn_search(&vector, request.size);
    let output = state.engine.search(&state.index, body).await?;

    let took_ms = start.elapsed().as_millis() as u64;
    info!(query = %request.query, took_ms, "semantic search complete");

    Ok(Json(SearchResponse::new(
        request.query,
        state.index.clone(),
        output,
        took_ms,
    )))
}

/// POST /v1/search/autocomplete - prefix suggestions
pub async fn autocomplete_handler(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    request.validate()?;
    let start = Instant::now();

    let body = query::autocomplete(request.trimmed_query(), request.size);
    let output = state.engine.search(&state.index, body).await?;

    let took_ms = start.elapsed().as_millis() as u64;
    info!(prefix = %request.query, took_ms, "autocomplete complete");

    Ok(Json(SearchResponse::new(
        request.query,
        state.index.clone(),
        output,
        took_ms,
    )))
}

/// POST /v1/analyze - run an index analyzer over input text
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    request.validate()?;

    let body = query::analyze(request.analyzer_name.trim(), &request.input_text);
    let output = state.engine.analyze(&state.index, body).await?;

    Ok(Json(AnalyzeResponse {
        analyzer: request.analyzer_name,
        output,
    }))
}

/// GET /v1/indices/:index - index metadata passthrough
pub async fn index_meta_handler(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<IndexMetaResponse>, ApiError> {
    if index.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "index name cannot be empty".to_string(),
        ));
    }

    let output = state.engine.index_meta(&index).await.map_err(|e| {
        warn!(index = %index, error = %e, "index metadata lookup failed");
        e
    })?;

    Ok(Json(IndexMetaResponse { index, output }))
}
