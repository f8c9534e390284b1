// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides a system health endpoint for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Health check routes for service monitoring

use crate::{constants::routes, sse::SseManager};
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(manager: Arc<SseManager>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::health_handler))
            .with_state(manager)
    }

    async fn health_handler(State(manager): State<Arc<SseManager>>) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "active_channels": manager.active_channels().await
        }))
    }
}
