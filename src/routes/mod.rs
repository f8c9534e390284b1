// ABOUTME: Route module organization for notify relay HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Route module for the notify relay
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the manager layer. The SSE routes themselves
//! live next to the manager in [`crate::sse`].

/// Health check and system status routes
pub mod health;

pub use health::HealthRoutes;
