//! HS256 access tokens.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use facilityhub_config::JwtConfig;
use facilityhub_core::AppError;

use crate::claims::Claims;

/// Signs a token for `user_id` that lives for
/// `jwt_config.access_token_expiry` seconds.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let issued_at = Utc::now().timestamp().max(0) as usize;
    let claims = Claims::new(user_id, email, issued_at, jwt_config.access_token_expiry);
    let key = EncodingKey::from_secret(jwt_config.secret.as_bytes());

    encode(&Header::default(), &claims, &key)
        .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Checks the signature and `exp`, then hands back the claims.
///
/// Every failure maps to the same 401 so callers cannot tell a bad signature
/// from an expired token.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let key = DecodingKey::from_secret(jwt_config.secret.as_bytes());

    match decode::<Claims>(token, &key, &Validation::default()) {
        Ok(data) => Ok(data.claims),
        Err(_) => Err(AppError::unauthorized("Invalid or expired token")),
    }
}
