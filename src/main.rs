// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};

use search_gateway::{
    api::{start_server, AppState},
    config::Settings,
    embedding::{TitanConfig, TitanEmbedder},
    engine::{OpenSearchClient, OpenSearchConfig},
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    settings.validate().map_err(anyhow::Error::msg)?;

    let engine = OpenSearchClient::new(OpenSearchConfig {
        endpoint: settings.opensearch.endpoint.clone(),
        username: settings.opensearch.username.clone(),
        password: settings.opensearch.password.clone(),
        timeout_ms: settings.opensearch.timeout_ms,
    });

    let embedder = TitanEmbedder::new(TitanConfig {
        endpoint: settings.embedding.endpoint.clone(),
        api_key: settings.embedding.api_key.clone(),
        model_id: settings.embedding.model_id.clone(),
        dimensions: settings.embedding.dimensions,
        timeout_ms: settings.embedding.timeout_ms,
    });

    if settings.embedding.endpoint.is_empty() {
        tracing::warn!("no embedding endpoint configured, semantic search will answer 503");
    }

    let state = AppState {
        engine: Arc::new(engine),
        embedder: Arc::new(embedder),
        index: settings.opensearch.index.clone(),
    };

    start_server(state, settings.api_port)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
