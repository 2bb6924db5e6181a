use std::fmt;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use facilityhub_auth::{Claims, verify_token};
use facilityhub_core::AppError;
use facilityhub_models::UserId;
use facilityhub_nav::Session;

use crate::state::AppState;

/// Bearer-authenticated caller.
///
/// Keeps the raw token so profile lookups can be made on the caller's
/// behalf.
#[derive(Clone)]
pub struct AuthUser {
    pub claims: Claims,
    token: String,
}

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.claims
            .subject()
            .map(UserId::from)
            .ok_or_else(|| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn session(&self) -> Result<Session, AppError> {
        Ok(Session::new(self.user_id()?, self.token.clone()))
    }
}

impl fmt::Debug for AuthUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthUser")
            .field("sub", &self.claims.sub)
            .field("email", &self.claims.email)
            .finish_non_exhaustive()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                facilityhub_observability::track_access_denied("missing_token");
                AppError::unauthorized("Missing authorization header")
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config).inspect_err(|_| {
            facilityhub_observability::track_access_denied("invalid_token");
        })?;

        Ok(AuthUser {
            claims,
            token: token.to_string(),
        })
    }
}
