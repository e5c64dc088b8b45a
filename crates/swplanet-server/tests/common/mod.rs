//! Common test utilities for swplanet-server integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use swplanet_core::NewPlanet;
use swplanet_server::{api_router, AppState};

/// Creates a test app over an empty in-memory catalog.
pub fn create_test_app() -> Router {
    api_router(Arc::new(AppState::in_memory()))
}

/// Creates a test app seeded with Tatooine (1), Alderaan (2) and Hoth (3).
pub fn create_seeded_app() -> Router {
    let state = AppState::in_memory();
    for planet in catalog() {
        state.service.create(planet).expect("seed");
    }
    api_router(Arc::new(state))
}

pub fn planet() -> NewPlanet {
    NewPlanet::new("name", "climate", "terrain")
}

pub fn tatooine() -> NewPlanet {
    NewPlanet::new("Tatooine", "arid", "desert")
}

pub fn catalog() -> Vec<NewPlanet> {
    vec![
        tatooine(),
        NewPlanet::new("Alderaan", "temperate", "grasslands"),
        NewPlanet::new("Hoth", "frozen", "tundra"),
    ]
}

pub fn planet_json(planet: &NewPlanet) -> Value {
    json!({
        "name": planet.name,
        "climate": planet.climate,
        "terrain": planet.terrain
    })
}

/// Sends a request and returns the status with the parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("Invalid JSON")
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}
