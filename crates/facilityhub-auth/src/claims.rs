use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Payload of a FacilityHub access token.
///
/// Only identifies the caller. Tier, role and property are looked up from
/// the profile on every request so a role change applies without reissuing
/// tokens.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Account id as a hyphenated UUID
    pub sub: String,
    pub email: String,
    /// Unix seconds
    pub exp: usize,
    /// Unix seconds
    pub iat: usize,
}

impl Claims {
    /// Claims issued at `issued_at` that lapse `ttl_secs` later. A negative
    /// ttl is treated as zero.
    pub fn new(user_id: Uuid, email: impl Into<String>, issued_at: usize, ttl_secs: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            email: email.into(),
            exp: issued_at + ttl_secs.max(0) as usize,
            iat: issued_at,
        }
    }

    /// The subject as a UUID, if it is one.
    pub fn subject(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_expiry_from_ttl() {
        let id = Uuid::new_v4();
        let claims = Claims::new(id, "officer@site.test", 1_000, 900);

        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 1_900);
        assert_eq!(claims.subject(), Some(id));
    }

    #[test]
    fn test_negative_ttl_expires_immediately() {
        let claims = Claims::new(Uuid::nil(), "a@site.test", 50, -10);
        assert_eq!(claims.exp, 50);
    }

    #[test]
    fn test_foreign_subject_is_not_a_uuid() {
        let json = r#"{"sub":"user-id-456","email":"user@site.test","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(claims.sub, "user-id-456");
        assert!(claims.subject().is_none());
    }
}
