// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! OpenSearch client tests against a mocked cluster

use search_gateway::engine::{EngineError, OpenSearchClient, OpenSearchConfig, SearchEngine};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenSearchClient {
    OpenSearchClient::new(OpenSearchConfig {
        endpoint: server.uri(),
        username: "user".to_string(),
        password: "pass".to_string(),
        timeout_ms: 5_000,
    })
}

#[tokio::test]
async fn test_search_forwards_body_and_returns_raw_response() {
    let server = MockServer::start().await;
    let query = json!({"size": 5, "query": {"match_all": {}}});

    Mock::given(method("POST"))
        .and(path("/products-mg/_search"))
        .and(body_json(query.clone()))
        // base64("user:pass")
        .and(header("authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"took": 3, "hits": {"total": {"value": 1}, "hits": []}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .search("products-mg", query)
        .await
        .unwrap();
    assert_eq!(response["hits"]["total"]["value"], 1);
}

#[tokio::test]
async fn test_search_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products-mg/_search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let result = client_for(&server).search("products-mg", json!({})).await;
    match result {
        Err(EngineError::ApiError { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("unauthorized"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_endpoint_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products-mg/_analyze"))
        .and(body_json(json!({"analyzer": "standard", "text": "hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"tokens": [{"token": "hi", "position": 0}]}),
        ))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .analyze("products-mg", json!({"analyzer": "standard", "text": "hi"}))
        .await
        .unwrap();
    assert_eq!(response["tokens"][0]["token"], "hi");
}

#[tokio::test]
async fn test_index_meta_passthrough() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products-mg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"products-mg": {"mappings": {}, "settings": {}}}),
        ))
        .mount(&server)
        .await;

    let response = client_for(&server).index_meta("products-mg").await.unwrap();
    assert!(response["products-mg"]["mappings"].is_object());
}

#[tokio::test]
async fn test_index_meta_missing_index() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/no-such-index"))
        .respond_with(ResponseTemplate::new(404).set_body_string("index_not_found_exception"))
        .mount(&server)
        .await;

    let result = client_for(&server).index_meta("no-such-index").await;
    assert!(matches!(
        result,
        Err(EngineError::ApiError { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_cluster_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products-mg/_search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("cluster overloaded"))
        .mount(&server)
        .await;

    let result = client_for(&server).search("products-mg", json!({})).await;
    assert!(matches!(
        result,
        Err(EngineError::ApiError { status: 503, .. })
    ));
}
