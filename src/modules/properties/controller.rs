use axum::{
    Json,
    extract::{Path, State},
};
use facilityhub_core::AppError;
use facilityhub_models::{Property, PropertyId};
use tracing::instrument;

use crate::docs::ErrorResponse;
use crate::modules::properties::service::PropertyService;
use crate::state::AppState;

/// Property by id, including its logo
///
/// Public so the login screen can show property branding.
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    params(
        ("id" = String, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property", body = Property),
        (status = 404, description = "Property not found", body = ErrorResponse)
    ),
    tag = "Properties"
)]
#[instrument(skip(state))]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<PropertyId>,
) -> Result<Json<Property>, AppError> {
    let property = PropertyService::get_property(state.properties.as_ref(), id).await?;
    Ok(Json(property))
}
