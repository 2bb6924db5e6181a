use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_navigation, list_roles, preview_role};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new().route("/", get(get_navigation))
}

/// Organization-admin routes; the caller layers the role check.
pub fn init_navigation_roles_router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles))
        .route("/roles/{role}/preview", get(preview_role))
}
