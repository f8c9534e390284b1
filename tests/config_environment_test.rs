// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Verifies defaults, overrides, and fallback behavior for bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use notify_relay::config::environment::{Environment, LogLevel, ServerConfig};
use notify_relay::logging::LoggingConfig;
use serial_test::serial;
use std::env;

const CONFIG_VARS: &[&str] = &[
    "HTTP_PORT",
    "SSE_CHANNEL_BUFFER",
    "SSE_IDLE_TIMEOUT_SECS",
    "SSE_KEEPALIVE_SECS",
    "CORS_ALLOWED_ORIGINS",
    "ENVIRONMENT",
    "RUST_LOG",
];

fn clear_config_vars() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_config_vars();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.sse.channel_buffer, 64);
    assert_eq!(config.sse.idle_timeout_secs, 300);
    assert_eq!(config.sse.keepalive_secs, 15);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_port_override() {
    clear_config_vars();
    env::set_var("HTTP_PORT", "9090");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);

    clear_config_vars();
}

#[test]
#[serial]
fn test_sse_overrides() {
    clear_config_vars();
    env::set_var("SSE_CHANNEL_BUFFER", "8");
    env::set_var("SSE_IDLE_TIMEOUT_SECS", "0");
    env::set_var("SSE_KEEPALIVE_SECS", "30");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.sse.channel_buffer, 8);
    assert_eq!(config.sse.idle_timeout_secs, 0); // Disabled
    assert_eq!(config.sse.keepalive_secs, 30);

    clear_config_vars();
}

#[test]
#[serial]
fn test_invalid_values_fall_back_to_defaults() {
    clear_config_vars();
    env::set_var("HTTP_PORT", "not-a-port");
    env::set_var("SSE_CHANNEL_BUFFER", "-3");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.sse.channel_buffer, 64);

    clear_config_vars();
}

#[test]
#[serial]
fn test_zero_channel_buffer_falls_back_to_default() {
    clear_config_vars();
    env::set_var("SSE_CHANNEL_BUFFER", "0");

    // Unlike the idle timeout, 0 is not a meaningful buffer capacity
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.sse.channel_buffer, 64);

    clear_config_vars();
}

#[test]
#[serial]
fn test_environment_override() {
    clear_config_vars();
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    assert!(config.environment.is_production());

    clear_config_vars();
}

#[test]
#[serial]
fn test_rust_log_feeds_logging_config() {
    clear_config_vars();
    env::set_var("RUST_LOG", "debug");

    // The level parsed into ServerConfig is the one the logging layer uses
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);

    let logging = LoggingConfig::from_env(&config.log_level);
    assert_eq!(logging.level, "debug");

    clear_config_vars();
}

#[test]
#[serial]
fn test_cors_origin_list() {
    clear_config_vars();
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://app.example.com,https://admin.example.com",
    );

    let config = ServerConfig::from_env().unwrap();
    assert!(config.cors.allowed_origins.contains("app.example.com"));

    clear_config_vars();
}
