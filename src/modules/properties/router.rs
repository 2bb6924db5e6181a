use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_property;

pub fn init_properties_router() -> Router<AppState> {
    Router::new().route("/{id}", get(get_property))
}
