//! # FacilityHub Client
//!
//! [`HttpSources`] implements the navigation collaborators against a running
//! FacilityHub API, so a [`facilityhub_nav::NavigationSession`] can be driven
//! from outside the server (the CLI's `whoami` command does this).
//!
//! ```ignore
//! let sources = Arc::new(HttpSources::new(&ClientConfig::from_env())?);
//! let session = NavigationSession::new(Navigator::builtin()?, sources.clone(), sources);
//! ```

use async_trait::async_trait;
use facilityhub_config::ClientConfig;
use facilityhub_models::{Property, PropertyId, UserId, UserProfile};
use facilityhub_nav::{ProfileSource, PropertySource, Session, SourceError};
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HttpSources {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSources {
    pub fn new(config: &ClientConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &'static str,
    ) -> Result<T, SourceError> {
        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%status, what, "API response");
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_default();
            return Err(status_error(status, what, message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

fn status_error(status: StatusCode, what: &'static str, message: String) -> SourceError {
    match status {
        StatusCode::NOT_FOUND => SourceError::NotFound { what },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SourceError::Unauthorized,
        _ if message.is_empty() => SourceError::Transport(format!("{what} request failed with {status}")),
        _ => SourceError::Transport(format!("{what} request failed with {status}: {message}")),
    }
}

#[async_trait]
impl ProfileSource for HttpSources {
    #[instrument(skip(self, session))]
    async fn profile(&self, session: &Session, user_id: UserId) -> Result<UserProfile, SourceError> {
        let path = if user_id == session.user_id {
            "profiles/me".to_string()
        } else {
            format!("profiles/{user_id}")
        };
        let request = self.client.get(self.url(&path)).bearer_auth(&session.token);
        self.send(request, "profile").await
    }
}

#[async_trait]
impl PropertySource for HttpSources {
    #[instrument(skip(self))]
    async fn property(&self, id: PropertyId) -> Result<Property, SourceError> {
        let request = self.client.get(self.url(&format!("properties/{id}")));
        self.send(request, "property").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sources() -> HttpSources {
        HttpSources::new(&ClientConfig {
            base_url: "http://localhost:3000/".into(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_url_building() {
        let sources = sources();
        assert_eq!(sources.base_url(), "http://localhost:3000");
        assert_eq!(
            sources.url("/profiles/me"),
            "http://localhost:3000/api/profiles/me"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, "profile", String::new()),
            SourceError::NotFound { what: "profile" }
        );
        assert_eq!(
            status_error(StatusCode::FORBIDDEN, "profile", "nope".into()),
            SourceError::Unauthorized
        );
        assert_eq!(
            status_error(StatusCode::BAD_GATEWAY, "property", "upstream".into()),
            SourceError::Transport("property request failed with 502 Bad Gateway: upstream".into())
        );
    }
}
