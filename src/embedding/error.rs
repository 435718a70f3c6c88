// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Embedding adapter error taxonomy

use thiserror::Error;

/// Errors surfaced by the embedding adapter.
///
/// Every failure is returned to the immediate caller; the adapter never
/// retries and never substitutes an empty vector for a failed call.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Caller fault: the input text is unusable. Raised before any
    /// network call is attempted.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Configuration fault: the embedding client has no endpoint to talk
    /// to. Raised before any network call is attempted.
    #[error("embedding client is not configured")]
    ServiceUnavailable,

    /// The upstream response parsed, but no vector was present under
    /// either the singular or the plural schema.
    #[error("no embedding in model response")]
    EmptyEmbedding,

    /// The outbound call itself failed (network, auth, throttling, or a
    /// non-success status). The original cause is attached when one exists.
    #[error("embedding request failed: {message}")]
    Upstream {
        /// Diagnostic from the transport or the upstream body
        message: String,
        /// Transport-level cause, if the failure came from the HTTP client
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl EmbeddingError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EmbeddingError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn upstream(err: reqwest::Error) -> Self {
        EmbeddingError::Upstream {
            message: err.to_string(),
            source: Some(err),
        }
    }

    pub(crate) fn upstream_status(status: u16, body: String) -> Self {
        EmbeddingError::Upstream {
            message: format!("model endpoint returned {}: {}", status, body),
            source: None,
        }
    }
}
