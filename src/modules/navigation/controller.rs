use axum::{
    Json,
    extract::{Path, State},
};
use facilityhub_core::AppError;
use facilityhub_nav::ExpandedGroups;
use tracing::instrument;

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::modules::navigation::model::{
    NavigationQuery, NavigationResponse, PreviewQuery, PreviewResponse, RolesResponse,
};
use crate::modules::navigation::service::NavigationService;
use crate::state::AppState;
use crate::validator::ValidatedQuery;

/// Sidebar navigation for the authenticated caller
///
/// A failed profile lookup still returns 200 with an empty, degraded menu.
#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Resolved menu", body = NavigationResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_navigation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<NavigationQuery>,
) -> Result<Json<NavigationResponse>, AppError> {
    let session = auth_user.session()?;
    let expanded = ExpandedGroups::from_labels(query.expanded);

    let response = NavigationService::navigation_for(
        &state.navigator,
        state.profiles.as_ref(),
        state.properties.as_ref(),
        &session,
        query.current_path.as_deref(),
        &expanded,
    )
    .await;

    Ok(Json(response))
}

/// Role permission table
#[utoipa::path(
    get,
    path = "/api/navigation/roles",
    responses(
        (status = 200, description = "Roles and their granted labels", body = RolesResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - organization admin required", body = ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(NavigationService::roles(&state.navigator))
}

/// Menu a role would see under a given tier
#[utoipa::path(
    get,
    path = "/api/navigation/roles/{role}/preview",
    params(
        ("role" = String, Path, description = "Role identifier"),
        PreviewQuery
    ),
    responses(
        (status = 200, description = "Preview of the resolved menu", body = PreviewResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - organization admin required", body = ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn preview_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
    ValidatedQuery(query): ValidatedQuery<PreviewQuery>,
) -> Result<Json<PreviewResponse>, AppError> {
    Ok(Json(NavigationService::preview(
        &state.navigator,
        &role,
        query.tier,
        query.current_path.as_deref(),
    )))
}
