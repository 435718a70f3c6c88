// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search gateway
//!
//! A thin HTTP façade in front of an external OpenSearch cluster and an
//! external embedding model. Lexical, semantic (k-NN), and autocomplete
//! search requests are validated, turned into query DSL bodies, and
//! forwarded; engine responses pass through untouched.

pub mod api;
pub mod config;
pub mod embedding;
pub mod engine;

pub use api::{AppState, ApiError, ErrorResponse};
pub use config::Settings;
pub use embedding::{Embedder, EmbeddingError, TitanConfig, TitanEmbedder};
pub use engine::{EngineError, OpenSearchClient, OpenSearchConfig, SearchEngine};
