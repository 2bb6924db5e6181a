//! Listener configuration.
//!
//! - `APP_HOST` (default `0.0.0.0`)
//! - `APP_PORT` (default `3000`)
//! - `METRICS_PORT` (default `9090`)

use std::env;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            metrics_port: 9090,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("APP_HOST").unwrap_or(defaults.host),
            port: env_or("APP_PORT", defaults.port),
            metrics_port: env_or("METRICS_PORT", defaults.metrics_port),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_bind_address(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}
