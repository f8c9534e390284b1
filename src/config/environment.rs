// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management for production deployment

use crate::constants::env_config;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for security and other configurations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback for unrecognized values
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// SSE stream configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SseConfig {
    /// Per-subscriber bounded channel capacity
    pub channel_buffer: usize,
    /// Idle timeout in seconds for open streams; 0 disables the timeout
    pub idle_timeout_secs: u64,
    /// Keepalive comment interval in seconds
    pub keepalive_secs: u64,
}

impl Default for SseConfig {
    fn default() -> Self {
        use crate::constants::network_config;
        Self {
            channel_buffer: network_config::SSE_CHANNEL_BUFFER,
            idle_timeout_secs: network_config::SSE_IDLE_TIMEOUT_SECS,
            keepalive_secs: network_config::SSE_KEEPALIVE_SECS,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Wildcard ("*") or comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".into(),
        }
    }
}

/// Top-level server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// SSE stream settings
    pub sse: SseConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: crate::constants::ports::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            sse: SseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds a value that cannot
    /// be parsed for its setting
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            ),
            sse: SseConfig {
                channel_buffer: env_config::sse_channel_buffer(),
                idle_timeout_secs: env_config::sse_idle_timeout_secs(),
                keepalive_secs: env_config::sse_keepalive_secs(),
            },
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
        };

        Ok(config)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Notify Relay Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - SSE Channel Buffer: {}\n\
             - SSE Idle Timeout: {}\n\
             - SSE Keepalive: {}s\n\
             - CORS Origins: {}",
            self.http_port,
            self.log_level,
            self.environment,
            self.sse.channel_buffer,
            if self.sse.idle_timeout_secs == 0 {
                "disabled".into()
            } else {
                format!("{}s", self.sse.idle_timeout_secs)
            },
            self.sse.keepalive_secs,
            self.cors.allowed_origins,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
        assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
        assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!(
            Environment::from_str_or_default("production"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("testing"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything-else"),
            Environment::Development
        );
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.sse.channel_buffer, 64);
        assert_eq!(config.sse.keepalive_secs, 15);
        assert_eq!(config.cors.allowed_origins, "*");
    }

    #[test]
    fn test_summary_mentions_port() {
        let config = ServerConfig::default();
        let summary = config.summary();
        assert!(summary.contains("8080"));
        assert!(summary.contains("development"));
    }
}
