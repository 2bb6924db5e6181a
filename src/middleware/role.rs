//! Organization-admin authorization.
//!
//! The token only identifies the caller; the account tier comes from the
//! caller's profile, so every check costs one profile lookup.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use facilityhub_core::AppError;
use facilityhub_models::{AccountTier, UserProfile};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::source_error;

/// Profile of the authenticated caller.
pub async fn caller_profile(state: &AppState, auth_user: &AuthUser) -> Result<UserProfile, AppError> {
    let session = auth_user.session()?;
    state
        .profiles
        .profile(&session, session.user_id)
        .await
        .map_err(source_error)
}

pub fn is_org_admin(profile: &UserProfile) -> bool {
    profile.user_type == AccountTier::Admin
}

fn forbidden() -> AppError {
    facilityhub_observability::track_access_denied("not_org_admin");
    AppError::forbidden("Access denied. Organization admin required.")
}

/// Middleware for organization-admin only routes.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/roles", get(list_roles))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_org_admin));
/// ```
pub async fn require_org_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();
    match RequireOrgAdmin::from_request_parts(&mut parts, &state).await {
        Ok(_) => next.run(Request::from_parts(parts, body)).await,
        Err(err) => err.into_response(),
    }
}

/// Extractor form of [`require_org_admin`].
#[derive(Debug, Clone)]
pub struct RequireOrgAdmin(pub AuthUser, pub UserProfile);

impl FromRequestParts<AppState> for RequireOrgAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let profile = match caller_profile(state, &auth_user).await {
            Ok(profile) => profile,
            // A caller without a profile has no tier.
            Err(err) if err.status == StatusCode::NOT_FOUND => return Err(forbidden()),
            Err(err) => return Err(err),
        };

        if !is_org_admin(&profile) {
            return Err(forbidden());
        }

        Ok(RequireOrgAdmin(auth_user, profile))
    }
}
