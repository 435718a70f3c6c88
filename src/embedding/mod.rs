// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text embedding adapter
//!
//! Converts query text into a fixed-length vector via an external embedding
//! model (Amazon Titan Text Embeddings v2 over the Bedrock runtime HTTP API).
//! The adapter is stateless: one outbound call per invocation, no caching,
//! no retry. Callers own the returned vector.

pub mod error;
pub mod titan;

pub use error::EmbeddingError;
pub use titan::{Embedder, TitanConfig, TitanEmbedder};
