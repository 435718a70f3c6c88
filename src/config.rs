// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gateway configuration
//!
//! All settings come from environment variables (with `.env` support in the
//! binary). The embedding side is optional: with neither `BEDROCK_ENDPOINT`
//! nor `AWS_REGION` set the gateway still starts, and semantic search
//! answers 503.

use std::env;
use url::Url;

use crate::embedding::titan::DEFAULT_MODEL_ID;

/// Default index search requests run against
const DEFAULT_INDEX: &str = "products-mg";

/// Top-level settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// Search cluster connection
    pub opensearch: OpenSearchSettings,
    /// Embedding model connection
    pub embedding: EmbeddingSettings,
}

#[derive(Debug, Clone)]
pub struct OpenSearchSettings {
    /// Base URL of the cluster
    pub endpoint: String,
    pub username: String,
    pub password: String,
    /// Index search requests run against
    pub index: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct EmbeddingSettings {
    /// Bedrock runtime base URL; empty disables semantic search
    pub endpoint: String,
    /// Bearer token for the runtime API
    pub api_key: Option<String>,
    pub model_id: String,
    /// Dimensionality hint; None omits it from requests
    pub dimensions: Option<u32>,
    pub timeout_ms: u64,
}

impl Settings {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let opensearch_endpoint = env::var("OPENSEARCH_ENDPOINT")
            .ok()
            .or_else(|| env::var("OPENSEARCH_HOST").ok().map(|h| format!("https://{}", h)))
            .unwrap_or_default();

        // An explicit endpoint wins; otherwise derive it from the region
        let bedrock_endpoint = env::var("BEDROCK_ENDPOINT")
            .ok()
            .or_else(|| {
                env::var("AWS_REGION")
                    .ok()
                    .filter(|r| !r.is_empty())
                    .map(|r| format!("https://bedrock-runtime.{}.amazonaws.com", r))
            })
            .unwrap_or_default();

        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            opensearch: OpenSearchSettings {
                endpoint: opensearch_endpoint,
                username: env::var("OPENSEARCH_USER").unwrap_or_default(),
                password: env::var("OPENSEARCH_PASSWORD").unwrap_or_default(),
                index: env::var("OPENSEARCH_INDEX").unwrap_or_else(|_| DEFAULT_INDEX.to_string()),
                timeout_ms: env::var("OPENSEARCH_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10_000),
            },
            embedding: EmbeddingSettings {
                endpoint: bedrock_endpoint,
                api_key: env::var("BEDROCK_API_KEY").ok().filter(|k| !k.is_empty()),
                model_id: env::var("EMBEDDING_MODEL_ID")
                    .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
                dimensions: match env::var("EMBEDDING_DIMENSIONS") {
                    Ok(v) if v.is_empty() => None,
                    Ok(v) => v.parse().ok(),
                    Err(_) => Some(512),
                },
                timeout_ms: env::var("EMBEDDING_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10_000),
            },
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.opensearch.endpoint.is_empty() {
            return Err("OPENSEARCH_ENDPOINT (or OPENSEARCH_HOST) must be set".to_string());
        }
        Url::parse(&self.opensearch.endpoint)
            .map_err(|e| format!("Invalid OpenSearch endpoint: {}", e))?;

        if !self.embedding.endpoint.is_empty() {
            Url::parse(&self.embedding.endpoint)
                .map_err(|e| format!("Invalid Bedrock endpoint: {}", e))?;
        }

        if self.opensearch.index.trim().is_empty() {
            return Err("OpenSearch index cannot be empty".to_string());
        }
        if self.opensearch.timeout_ms == 0 || self.embedding.timeout_ms == 0 {
            return Err("Timeouts must be greater than 0".to_string());
        }
        if self.embedding.dimensions == Some(0) {
            return Err("Embedding dimensions must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_port: 8080,
            opensearch: OpenSearchSettings {
                endpoint: String::new(),
                username: String::new(),
                password: String::new(),
                index: DEFAULT_INDEX.to_string(),
                timeout_ms: 10_000,
            },
            embedding: EmbeddingSettings {
                endpoint: String::new(),
                api_key: None,
                model_id: DEFAULT_MODEL_ID.to_string(),
                dimensions: Some(512),
                timeout_ms: 10_000,
            },
        }
    }
}
