// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search engine client errors

use thiserror::Error;

/// Errors from the external search cluster or its transport
#[derive(Debug, Error)]
pub enum EngineError {
    /// Non-success status from the cluster
    #[error("search engine returned {status}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Request exceeded the configured deadline
    #[error("search engine request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// Transport-level failure (connect, TLS, body read, decode)
    #[error("search engine request failed")]
    Transport(#[from] reqwest::Error),

    /// No cluster endpoint configured
    #[error("search engine client is not configured")]
    NotConfigured,
}
