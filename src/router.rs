use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use facilityhub_config::CorsConfig;
use facilityhub_observability::{logging_middleware, metrics_middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::role::require_org_admin;
use crate::modules::navigation::{init_navigation_roles_router, init_navigation_router};
use crate::modules::profiles::init_profiles_router;
use crate::modules::properties::init_properties_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Routes under `/api`. Role introspection sits behind the org admin gate;
/// the caller's own menu only needs a token.
fn api_router(state: &AppState) -> Router<AppState> {
    let roles = init_navigation_roles_router().route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_org_admin,
    ));

    Router::new()
        .nest("/navigation", init_navigation_router().merge(roles))
        .nest("/profiles", init_profiles_router())
        .nest("/properties", init_properties_router())
}

/// Read-only API, so only GET and preflight are allowed.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let openapi = ApiDoc::openapi();
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi.clone()))
        .merge(Scalar::with_url("/scalar", openapi))
        .route("/health", get(health))
        .nest("/api", api_router(&state))
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
