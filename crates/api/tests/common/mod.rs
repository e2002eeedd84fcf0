//! Common test utilities for integration tests.
//!
//! The application under test runs on the in-memory repository, so these
//! tests need no database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use campus_api::{app::create_app_with_repository, config::Config};
use domain::services::InMemoryCampusRepository;
use fake::{faker::internet::en::Username, Fake};
use std::sync::Arc;

/// Test configuration. Never touches the environment.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.server.address = "127.0.0.1:0".to_string();
    config.database.url = "postgres://unused".to_string();
    config
}

/// Application backed by a fresh in-memory repository.
///
/// The repository is returned as well so tests can inspect stored state.
pub fn create_test_app() -> (Router, Arc<InMemoryCampusRepository>) {
    create_test_app_with(InMemoryCampusRepository::new())
}

/// Application backed by the given repository.
pub fn create_test_app_with(
    repository: InMemoryCampusRepository,
) -> (Router, Arc<InMemoryCampusRepository>) {
    let repository = Arc::new(repository);
    let app = create_app_with_repository(&test_config(), repository.clone());
    (app, repository)
}

/// Random peer login, unique enough for one test.
pub fn unique_peer_name() -> String {
    let name: String = Username().fake();
    format!("{}_{}", name, (1000..9999).fake::<u32>())
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a request with an arbitrary content type and raw body.
pub fn raw_request(method: Method, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Upsert one peer through the API.
pub fn peer_update_request(peer_name: &str, row: &str, col: &str, cluster: &str) -> Request<Body> {
    json_request(
        Method::POST,
        "/update_peers/",
        serde_json::json!({
            "peers": [{
                "peer_name": peer_name,
                "row": row,
                "col": col,
                "cluster": cluster
            }]
        }),
    )
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
