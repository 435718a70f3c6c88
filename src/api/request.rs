// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request types for the gateway endpoints

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::ApiError;

/// Longest accepted query string
const MAX_QUERY_LEN: usize = 500;

/// Most results a single request may ask for
const MAX_NUM_RESULTS: usize = 100;

/// Body for the text, semantic, and autocomplete search endpoints
///
/// # Example
/// ```json
/// {
///   "query": "something for sleep",
///   "filters": {
///     "brand": ["Brand1", "Brand2"],
///     "product_type": ["Edibles"]
///   },
///   "size": 10
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Search query text
    pub query: String,

    /// Optional faceted filters; list-valued entries become term filters
    #[serde(default)]
    pub filters: HashMap<String, serde_json::Value>,

    /// Number of results to return (1-100, default 10)
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_size() -> usize {
    10
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "query".to_string(),
                message: "query cannot be empty or contain only whitespace".to_string(),
            });
        }
        if self.query.len() > MAX_QUERY_LEN {
            return Err(ApiError::ValidationError {
                field: "query".to_string(),
                message: format!("query cannot exceed {} characters", MAX_QUERY_LEN),
            });
        }
        if self.size < 1 {
            return Err(ApiError::ValidationError {
                field: "size".to_string(),
                message: "size must be at least 1".to_string(),
            });
        }
        if self.size > MAX_NUM_RESULTS {
            return Err(ApiError::ValidationError {
                field: "size".to_string(),
                message: format!("size cannot exceed {}", MAX_NUM_RESULTS),
            });
        }
        Ok(())
    }

    /// Query text with surrounding whitespace removed
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }
}

/// Body for the analyzer test endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Analyzer to run, e.g. "standard"
    pub analyzer_name: String,

    /// Text to analyze
    pub input_text: String,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.analyzer_name.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "analyzerName".to_string(),
                message: "analyzer name cannot be empty".to_string(),
            });
        }
        if self.input_text.trim().is_empty() {
            return Err(ApiError::ValidationError {
                field: "inputText".to_string(),
                message: "input text cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
