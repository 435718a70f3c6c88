// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! REST client for the external OpenSearch cluster

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::EngineError;

/// Operations the gateway forwards to the search cluster.
///
/// Behind a trait object so handler tests can substitute a double for the
/// real cluster.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Execute a query body against an index (`POST /{index}/_search`)
    async fn search(&self, index: &str, body: Value) -> Result<Value, EngineError>;

    /// Run an analyzer over text (`POST /{index}/_analyze`)
    async fn analyze(&self, index: &str, body: Value) -> Result<Value, EngineError>;

    /// Fetch index metadata (`GET /{index}`)
    async fn index_meta(&self, index: &str) -> Result<Value, EngineError>;
}

/// Connection settings for the cluster
#[derive(Debug, Clone)]
pub struct OpenSearchConfig {
    /// Base URL of the cluster, e.g. `https://search.example.com`
    pub endpoint: String,
    /// Basic auth username
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// Outbound request timeout
    pub timeout_ms: u64,
}

impl Default for OpenSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_ms: 10_000,
        }
    }
}

/// reqwest-backed OpenSearch REST client
pub struct OpenSearchClient {
    client: Client,
    config: OpenSearchConfig,
}

impl OpenSearchClient {
    pub fn new(config: OpenSearchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .gzip(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        !self.config.endpoint.is_empty()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        if self.config.username.is_empty() {
            request
        } else {
            request.basic_auth(&self.config.username, Some(&self.config.password))
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, EngineError> {
        if !self.is_configured() {
            return Err(EngineError::NotConfigured);
        }

        let response = self.authed(request).send().await.map_err(|e| {
            if e.is_timeout() {
                EngineError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                EngineError::Transport(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EngineError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SearchEngine for OpenSearchClient {
    async fn search(&self, index: &str, body: Value) -> Result<Value, EngineError> {
        debug!(index, "forwarding search to cluster");
        let request = self
            .client
            .post(self.url(&format!("{}/_search", index)))
            .json(&body);
        self.execute(request).await
    }

    async fn analyze(&self, index: &str, body: Value) -> Result<Value, EngineError> {
        debug!(index, "forwarding analyze to cluster");
        let request = self
            .client
            .post(self.url(&format!("{}/_analyze", index)))
            .json(&body);
        self.execute(request).await
    }

    async fn index_meta(&self, index: &str) -> Result<Value, EngineError> {
        debug!(index, "fetching index metadata");
        let request = self.client.get(self.url(index));
        self.execute(request).await
    }
}
