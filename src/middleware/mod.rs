// ABOUTME: HTTP middleware for request tracing and context propagation
// ABOUTME: Provides request ID generation and CORS configuration for structured logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// CORS configuration
pub mod cors;
/// Request ID correlation middleware
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
