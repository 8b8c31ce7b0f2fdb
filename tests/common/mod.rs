//! Local HTTP server used as the request target (and as a plain HTTP proxy)

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{AppendHeaders, Html, IntoResponse},
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    net::TcpListener,
};

/// Echo the request back as JSON.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let headers: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();

    Json(json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "headers": headers,
        "body": String::from_utf8_lossy(&body),
    }))
}

/// Bot-protection style HTML page
async fn blocked() -> impl IntoResponse {
    (
        StatusCode::FORBIDDEN,
        Html("<!DOCTYPE html><html><title>Just a moment...</title></html>"),
    )
}

async fn repeated_headers() -> impl IntoResponse {
    (
        AppendHeaders([("x-multi", "first"), ("x-multi", "second")]),
        "plain text",
    )
}

fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/api/auth/authenticate", any(echo))
        .route("/blocked", get(blocked))
        .route("/multi", get(repeated_headers))
}

/// Start the server on an ephemeral port.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Accept one connection and return the first request line it sends.
///
/// The connection is dropped afterwards, so a tunnelled request fails.
pub async fn spawn_first_line_listener() -> (SocketAddr, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        line.trim_end().to_string()
    });
    (addr, handle)
}
