#![allow(dead_code)]

use std::{net::TcpListener, sync::Arc};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
};
use imagegen_proxy::{app::envy::Envy, AppState};
use serde_json::Value;

pub const TEST_KEY: &str = "test-key";

pub fn state(api_key: Option<&str>, upstream_url: &str) -> AppState {
    AppState {
        envy: Arc::new(Envy {
            port: None,
            api_key: api_key.map(str::to_string),
            upstream_url: Some(upstream_url.to_string()),
            rate_limit_per_second: None,
        }),
        client: reqwest::Client::new(),
    }
}

pub fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json<B>(response: Response<B>) -> Value
where
    B: hyper::body::HttpBody,
    B::Error: std::fmt::Debug,
{
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).expect("response body is json")
}

/// Serves the proxy on an ephemeral port and returns its `/generate` url.
pub fn spawn_proxy(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(imagegen_proxy::router(state).into_make_service());

    tokio::spawn(server);

    format!("http://{}/generate", addr)
}
