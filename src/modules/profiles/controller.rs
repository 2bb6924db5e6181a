use axum::{
    Json,
    extract::{Path, State},
};
use facilityhub_core::AppError;
use facilityhub_models::{UserId, UserProfile};
use tracing::instrument;

use crate::docs::ErrorResponse;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::{caller_profile, is_org_admin};
use crate::modules::profiles::service::ProfileService;
use crate::state::AppState;

/// Profile of the authenticated caller
#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Caller profile", body = UserProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    let session = auth_user.session()?;
    let profile =
        ProfileService::get_profile(state.profiles.as_ref(), &session, session.user_id).await?;
    Ok(Json(profile))
}

/// Profile by user id
///
/// Callers may always read their own profile. Reading anyone else's
/// requires an organization admin.
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - organization admin required", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_profile_by_id(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<UserId>,
) -> Result<Json<UserProfile>, AppError> {
    let session = auth_user.session()?;

    if id != session.user_id {
        let caller = caller_profile(&state, &auth_user).await?;
        if !is_org_admin(&caller) {
            facilityhub_observability::track_access_denied("foreign_profile");
            return Err(AppError::forbidden(
                "Access denied. Only organization admins can view other profiles.",
            ));
        }
    }

    let profile = ProfileService::get_profile(state.profiles.as_ref(), &session, id).await?;
    Ok(Json(profile))
}
