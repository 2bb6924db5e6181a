//! # FacilityHub Config
//!
//! Configuration structures loaded from environment variables. Each type has a
//! `from_env()` constructor that falls back to development defaults.
//!
//! - [`jwt`]: bearer token signing and expiry
//! - [`cors`]: allowed browser origins
//! - [`server`]: bind address and metrics port
//! - [`navigation`]: permission table source
//! - [`client`]: API base URL used by the CLI
//!
//! # Example
//!
//! ```ignore
//! use facilityhub_config::{CorsConfig, JwtConfig, NavigationConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let navigation_config = NavigationConfig::from_env();
//! ```

pub mod client;
pub mod cors;
pub mod jwt;
pub mod navigation;
pub mod server;

pub use client::ClientConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use navigation::NavigationConfig;
pub use server::ServerConfig;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
