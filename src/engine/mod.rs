// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenSearch client module
//!
//! A thin REST client for the external search cluster plus the query DSL
//! builders the gateway forwards. The gateway never reshapes engine hits;
//! responses pass through as raw JSON.

pub mod client;
pub mod error;
pub mod query;

pub use client::{OpenSearchClient, OpenSearchConfig, SearchEngine};
pub use error::EngineError;
