// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Titan embedding client (Bedrock runtime HTTP API)
//!
//! Invokes `POST {endpoint}/model/{model_id}/invoke` with
//! `{"inputText": ..., "dimensions": ...}` and accepts both response shapes
//! the model family produces: a direct `embedding` vector, or an
//! `embeddings` list whose first entry wraps the vector.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::error::EmbeddingError;

/// Default Titan v2 model
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-embed-text-v2:0";

/// Turns text into a fixed-length embedding vector.
///
/// Implementations are injected into the HTTP layer behind a trait object so
/// handlers can be exercised with test doubles.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed one non-empty text string.
    ///
    /// Fails with [`EmbeddingError::InvalidInput`] on empty or
    /// whitespace-only text, before any network call.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Model identifier, for logging and health reporting
    fn model_id(&self) -> &str;

    /// Whether the client has an endpoint to call
    fn is_configured(&self) -> bool;
}

/// Connection settings for the Bedrock runtime endpoint
#[derive(Debug, Clone)]
pub struct TitanConfig {
    /// Base URL of the Bedrock runtime, empty when embeddings are disabled
    pub endpoint: String,
    /// Bearer token for the runtime API, if required
    pub api_key: Option<String>,
    /// Model to invoke
    pub model_id: String,
    /// Dimensionality hint sent with each request; omitted when None
    pub dimensions: Option<u32>,
    /// Outbound request timeout
    pub timeout_ms: u64,
}

impl Default for TitanConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            dimensions: Some(512),
            timeout_ms: 10_000,
        }
    }
}

/// Embedding adapter backed by the Bedrock runtime
pub struct TitanEmbedder {
    client: Client,
    config: TitanConfig,
}

impl TitanEmbedder {
    pub fn new(config: TitanConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn invoke_url(&self) -> String {
        format!(
            "{}/model/{}/invoke",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model_id
        )
    }
}

#[async_trait]
impl Embedder for TitanEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EmbeddingError::invalid_input(
                "text cannot be empty or whitespace-only",
            ));
        }

        if !self.is_configured() {
            return Err(EmbeddingError::ServiceUnavailable);
        }

        let body = InvokeRequest {
            input_text: text,
            dimensions: self.config.dimensions,
        };

        let mut request = self.client.post(self.invoke_url()).json(&body);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(EmbeddingError::upstream)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::upstream_status(status.as_u16(), body));
        }

        let payload = response.text().await.map_err(EmbeddingError::upstream)?;

        let vector = serde_json::from_str::<InvokeResponse>(&payload)
            .ok()
            .and_then(InvokeResponse::into_vector)
            .ok_or(EmbeddingError::EmptyEmbedding)?;

        debug!(
            model = %self.config.model_id,
            dimensions = vector.len(),
            "embedding generated"
        );

        Ok(vector)
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    fn is_configured(&self) -> bool {
        !self.config.endpoint.is_empty()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeRequest<'a> {
    input_text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<u32>,
}

/// The two response shapes the model family produces.
///
/// Variant order matters: the singular shape is tried first, then the
/// plural list-of-results shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InvokeResponse {
    Single { embedding: Vec<f32> },
    Batch { embeddings: Vec<BatchEntry> },
}

#[derive(Debug, Deserialize)]
struct BatchEntry {
    embedding: Vec<f32>,
}

impl InvokeResponse {
    /// Extract the vector, treating a missing or empty one as absent.
    fn into_vector(self) -> Option<Vec<f32>> {
        let vector = match self {
            InvokeResponse::Single { embedding } => embedding,
            InvokeResponse::Batch { mut embeddings } => {
                if embeddings.is_empty() {
                    return None;
                }
                embeddings.remove(0).embedding
            }
        };

        if vector.is_empty() {
            None
        } else {
            Some(vector)
        }
    }
}
