// ABOUTME: Server-Sent Events (SSE) implementation for real-time notification fan-out
// ABOUTME: Provides the subscriber registry, broadcaster, and HTTP route handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Central SSE manager for channel lifecycle and message fan-out
pub mod manager;
/// HTTP route handlers for SSE endpoints
pub mod routes;

pub use manager::{ChannelId, SseManager};
pub use routes::SseRoutes;
