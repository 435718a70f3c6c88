// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query DSL builders
//!
//! Small constructors for the JSON bodies the gateway forwards. Filters are
//! faceted: list-valued entries become `terms` clauses, anything else is
//! ignored.

use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Fields searched by the lexical query, title weighted up
const TEXT_FIELDS: [&str; 2] = ["title^2", "description"];

/// Lexical multi-match query with optional term filters
pub fn text_search(query: &str, filters: &HashMap<String, Value>, size: usize) -> Value {
    let multi_match = json!({
        "multi_match": {
            "query": query,
            "fields": TEXT_FIELDS,
        }
    });

    let mut term_filters: Vec<Value> = filters
        .iter()
        .filter_map(|(field, values)| {
            values.as_array().map(|list| {
                let mut terms = Map::new();
                terms.insert(field.clone(), Value::Array(list.clone()));
                json!({ "terms": terms })
            })
        })
        .collect();
    // Deterministic body regardless of map iteration order
    term_filters.sort_by_key(|clause| clause.to_string());

    if term_filters.is_empty() {
        json!({ "size": size, "query": multi_match })
    } else {
        json!({
            "size": size,
            "query": {
                "bool": {
                    "must": [multi_match],
                    "filter": term_filters,
                }
            }
        })
    }
}

/// k-NN query over the embedding vector field
pub fn knn_search(vector: &[f32], k: usize) -> Value {
    json!({
        "size": k,
        "query": {
            "knn": {
                "embedding": {
                    "vector": vector,
                    "k": k,
                }
            }
        }
    })
}

/// Prefix match against the suggest field
pub fn autocomplete(prefix: &str, size: usize) -> Value {
    json!({
        "size": size,
        "query": {
            "match": {
                "name.suggest": prefix,
            }
        }
    })
}

/// `_analyze` body for a named analyzer
pub fn analyze(analyzer: &str, text: &str) -> Value {
    json!({
        "analyzer": analyzer,
        "text": text,
    })
}
