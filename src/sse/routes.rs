// ABOUTME: SSE route handlers for the subscription stream and the broadcast trigger
// ABOUTME: Provides HTTP endpoints for opening push streams and publishing notifications
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::manager::SseManager;
use crate::{
    config::environment::ServerConfig,
    constants::{protocol, routes},
    errors::{AppError, AppResult},
};
use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures_util::Stream;
use serde::Deserialize;
use std::{convert::Infallible, sync::Arc, time::Duration};

/// Shared state injected into the SSE route handlers
#[derive(Clone)]
pub struct SseState {
    /// Subscriber registry and broadcaster
    pub manager: Arc<SseManager>,
    /// Server configuration (stream timeouts and keepalive)
    pub config: Arc<ServerConfig>,
}

/// Query parameters for the notify endpoint
#[derive(Debug, Deserialize)]
pub struct NotifyParams {
    /// Message text to broadcast
    pub message: Option<String>,
}

/// SSE routes implementation
pub struct SseRoutes;

impl SseRoutes {
    /// Create all SSE routes with injected manager and configuration
    pub fn routes(manager: Arc<SseManager>, config: Arc<ServerConfig>) -> Router {
        Router::new()
            .route(routes::NOTIFICATIONS, get(Self::handle_subscribe))
            .route(routes::NOTIFY, get(Self::handle_notify))
            .with_state(SseState { manager, config })
    }

    /// Handle a new SSE subscription
    ///
    /// Registers a channel, then holds the response open and emits one
    /// `notification` event per broadcast message until the idle timeout
    /// elapses or the registry drops the channel. Cleanup on loop exit makes
    /// completion and timeout feed back into the registry's `remove`; a
    /// client that disconnects without either is pruned by the next
    /// broadcast's failed send.
    async fn handle_subscribe(
        State(state): State<SseState>,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
        tracing::info!("New SSE subscription request");

        let (channel_id, mut receiver) = state.manager.subscribe().await;
        let manager = state.manager.clone();
        let idle_timeout = match state.config.sse.idle_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let stream = async_stream::stream! {
            // Initial connection established event
            yield Ok::<_, Infallible>(Event::default()
                .event(protocol::EVENT_CONNECTION)
                .data(protocol::CONNECTED_DATA));

            loop {
                let next = if let Some(limit) = idle_timeout {
                    match tokio::time::timeout(limit, receiver.recv()).await {
                        Ok(next) => next,
                        Err(_elapsed) => {
                            tracing::info!(channel_id = %channel_id, "SSE stream idle timeout");
                            break;
                        }
                    }
                } else {
                    receiver.recv().await
                };

                match next {
                    Some(message) => {
                        yield Ok(Event::default()
                            .event(protocol::EVENT_NOTIFICATION)
                            .data(message));
                    }
                    None => {
                        tracing::info!(channel_id = %channel_id, "SSE channel closed by registry");
                        break;
                    }
                }
            }

            // Completion or timeout: report back into the registry
            manager.remove(channel_id).await;
        };

        let keepalive_interval = Duration::from_secs(state.config.sse.keepalive_secs);
        Sse::new(stream).keep_alive(
            KeepAlive::new()
                .interval(keepalive_interval)
                .text("keepalive"),
        )
    }

    /// Handle a broadcast trigger
    ///
    /// Invokes the broadcaster synchronously and returns the confirmation
    /// string regardless of how many subscribers received the message.
    async fn handle_notify(
        State(state): State<SseState>,
        Query(params): Query<NotifyParams>,
    ) -> AppResult<&'static str> {
        let message = params
            .message
            .ok_or_else(|| AppError::missing_field("message"))?;

        let delivered = state.manager.broadcast(&message).await;
        tracing::info!(delivered, "notification broadcast");

        Ok(protocol::NOTIFY_CONFIRMATION)
    }
}
