#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use facilityhub::router::init_router;
use facilityhub::state::AppState;
use facilityhub_auth::create_access_token;
use facilityhub_config::{CorsConfig, JwtConfig};
use facilityhub_models::{AccountTier, Property, PropertyId, UserId, UserProfile};
use facilityhub_nav::Navigator;
use facilityhub_nav::testing::InMemoryDirectory;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_LOGO: &str = "aGVsbG8=";

pub struct TestApp {
    pub router: Router,
    pub directory: Arc<InMemoryDirectory>,
    pub jwt_config: JwtConfig,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> TestApp {
    let directory = Arc::new(InMemoryDirectory::new());
    let jwt_config = test_jwt_config();
    let state = AppState {
        navigator: Navigator::builtin().unwrap(),
        profiles: directory.clone(),
        properties: directory.clone(),
        jwt_config: jwt_config.clone(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    };

    TestApp {
        router: init_router(state),
        directory,
        jwt_config,
    }
}

pub fn test_profile(tier: AccountTier, role: &str, property_id: Option<PropertyId>) -> UserProfile {
    let id = UserId::new();
    UserProfile {
        id,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{}@facilityhub.test", id),
        user_role: role.to_string(),
        user_type: tier,
        property_id,
    }
}

pub fn test_property(logo: Option<&str>) -> Property {
    Property {
        id: PropertyId::new(),
        name: "Tower A".to_string(),
        address: Some("1 Main Street".to_string()),
        logo: logo.map(str::to_string),
    }
}

impl TestApp {
    /// Stores `profile` and returns a bearer token for it.
    pub fn register(&self, profile: UserProfile) -> String {
        let token = self.token_for(profile.id, &profile.email);
        self.directory.insert_profile(profile);
        token
    }

    pub fn token_for(&self, user_id: UserId, email: &str) -> String {
        create_access_token(user_id.into_inner(), email, &self.jwt_config).unwrap()
    }

    pub fn add_property(&self, logo: Option<&str>) -> Property {
        let property = test_property(logo);
        self.directory.insert_property(property.clone());
        property
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&body).into_owned())
            })
        };
        (status, body)
    }
}

/// Labels of the top-level items of a navigation/preview body.
pub fn top_labels(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap().to_string())
        .collect()
}

/// Paths of every leaf under `items`, depth first.
pub fn leaf_paths(items: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    for item in items.as_array().unwrap() {
        match item.get("children") {
            Some(children) => paths.extend(leaf_paths(children)),
            None => paths.push(item["path"].as_str().unwrap().to_string()),
        }
    }
    paths
}

pub fn find_item<'a>(items: &'a Value, label: &str) -> Option<&'a Value> {
    for item in items.as_array()? {
        if item["label"] == label {
            return Some(item);
        }
        if let Some(found) = item.get("children").and_then(|c| find_item(c, label)) {
            return Some(found);
        }
    }
    None
}
