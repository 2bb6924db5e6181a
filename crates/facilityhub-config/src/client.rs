use std::env;
use std::time::Duration;

use crate::env_or;

/// Settings for talking to a running FacilityHub API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("FACILITYHUB_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout: Duration::from_secs(env_or("FACILITYHUB_API_TIMEOUT_SECS", 10)),
        }
    }
}
