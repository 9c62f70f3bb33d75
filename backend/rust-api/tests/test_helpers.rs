// Shared helpers for driving the router in integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use skill_swap_api::{app, AppState, Config};
use tower::ServiceExt;

pub fn test_state() -> AppState {
    AppState::new(&Config {
        app_id: "test-app".to_string(),
        ..Config::default()
    })
}

pub fn test_app() -> (Router, AppState) {
    let state = test_state();
    (app(state.clone()), state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body should be UTF-8")
    }
}

pub async fn send_raw(router: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request should build"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable")
        .to_vec();

    TestResponse { status, headers, body }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send_raw(router, Method::GET, uri, None).await
}

pub async fn send_json(router: &Router, method: Method, uri: &str, body: Value) -> TestResponse {
    send_raw(router, method, uri, Some(&body.to_string())).await
}
