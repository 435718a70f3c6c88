// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Response envelopes for the gateway endpoints
//!
//! The gateway is a façade: engine responses pass through untouched in the
//! `output` field, wrapped with just enough context to be useful.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope for the search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Original query text
    pub query: String,
    /// Index the query ran against
    pub index: String,
    /// Raw engine response
    pub output: Value,
    /// Gateway-side latency in milliseconds
    pub took_ms: u64,
}

impl SearchResponse {
    pub fn new(query: String, index: String, output: Value, took_ms: u64) -> Self {
        Self {
            query,
            index,
            output,
            took_ms,
        }
    }
}

/// Envelope for the analyzer endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analyzer: String,
    pub output: Value,
}

/// Envelope for index metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetaResponse {
    pub index: String,
    pub output: Value,
}

/// Liveness report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// Index search requests are forwarded to
    pub index: String,
    /// Whether the embedding model has an endpoint configured
    pub embedding_configured: bool,
    /// Embedding model identifier
    pub embedding_model: String,
}
