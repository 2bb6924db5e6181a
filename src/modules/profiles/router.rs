use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_my_profile, get_profile_by_id};

pub fn init_profiles_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_my_profile))
        .route("/{id}", get(get_profile_by_id))
}
