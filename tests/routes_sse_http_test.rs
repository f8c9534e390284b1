// ABOUTME: HTTP integration tests for the SSE routes and the health endpoint
// ABOUTME: Drives the assembled router in-process and validates responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for the relay endpoints
//!
//! Full SSE streaming behavior is complex to drive through an in-process
//! request. These tests focus on connection establishment, the publish path,
//! and response validation; streaming semantics are covered at the manager
//! level in `sse_manager_test.rs`.

use axum::body::Body;
use http::{Request, StatusCode};
use notify_relay::{
    config::environment::{ServerConfig, SseConfig},
    server::NotificationServer,
};
use std::sync::Arc;
use tower::ServiceExt;

fn test_server() -> NotificationServer {
    NotificationServer::new(Arc::new(ServerConfig::default()))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Notify Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_notify_returns_confirmation_without_subscribers() {
    let app = test_server().router();

    let request = Request::builder()
        .uri("/notify?message=hello")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Notification sent");
}

#[tokio::test]
async fn test_notify_missing_message_is_bad_request() {
    let app = test_server().router();

    let request = Request::builder()
        .uri("/notify")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("MISSING_REQUIRED_FIELD"));
    assert!(body.contains("message"));
}

#[tokio::test]
async fn test_notify_delivers_to_subscribed_channel() {
    let server = test_server();
    let manager = server.manager();
    let app = server.router();

    let (_id, mut rx) = manager.subscribe().await;

    let request = Request::builder()
        .uri("/notify?message=hello")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(rx.recv().await.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_notify_with_url_encoded_message() {
    let server = test_server();
    let manager = server.manager();
    let app = server.router();

    let (_id, mut rx) = manager.subscribe().await;

    let request = Request::builder()
        .uri("/notify?message=hello%20world")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(rx.recv().await.as_deref(), Some("hello world"));
}

// =============================================================================
// Subscription Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_notifications_opens_event_stream() {
    let server = test_server();
    let manager = server.manager();
    let app = server.router();

    let request = Request::builder()
        .uri("/notifications")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/event-stream"));

    assert_eq!(manager.active_channels().await, 1);
}

#[tokio::test]
async fn test_disconnected_stream_is_pruned_by_next_broadcast() {
    let server = test_server();
    let manager = server.manager();
    let app = server.router();

    let request = Request::builder()
        .uri("/notifications")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(manager.active_channels().await, 1);

    // Client goes away without completing: dropping the response drops the
    // stream and its receiver
    drop(response);

    let delivered = manager.broadcast("anyone there?").await;
    assert_eq!(delivered, 0);
    assert_eq!(manager.active_channels().await, 0);
}

#[tokio::test]
async fn test_idle_timeout_unregisters_channel() {
    let config = ServerConfig {
        sse: SseConfig {
            idle_timeout_secs: 1,
            ..SseConfig::default()
        },
        ..ServerConfig::default()
    };
    let server = NotificationServer::new(Arc::new(config));
    let manager = server.manager();
    let app = server.router();

    let request = Request::builder()
        .uri("/notifications")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(manager.active_channels().await, 1);

    // With no broadcasts the stream completes when the idle timeout elapses;
    // draining the body observes that completion
    let body = body_string(response).await;
    assert!(body.contains("connected"));

    assert_eq!(manager.active_channels().await, 0);
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_reports_active_channels() {
    let server = test_server();
    let manager = server.manager();
    let app = server.router();

    let (_id, _rx) = manager.subscribe().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["active_channels"], 1);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_server().router();

    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
