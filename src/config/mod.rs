// ABOUTME: Configuration management module for centralized server settings and parameters
// ABOUTME: Handles environment configs and runtime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

//! Configuration module for the notify relay
//!
//! This module provides centralized configuration management:
//!
//! - **Environment**: Server configuration from environment variables

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig, SseConfig};
