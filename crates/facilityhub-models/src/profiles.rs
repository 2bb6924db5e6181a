//! User profiles as returned by the profile service.

use std::fmt;
use std::str::FromStr;

use facilityhub_core::serde::deserialize_optional_uuid;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{PropertyId, UserId};

/// Account tier (`user_type`).
///
/// Decides which base navigation tree a user gets and under which path
/// prefix its routes live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AccountTier {
    /// Organization admin: full, unprefixed tree.
    #[serde(rename = "admin")]
    Admin,
    /// Client/property admin: `/cadmin` tree.
    #[serde(rename = "cadmin")]
    ClientAdmin,
    /// Role-restricted user scoped to one property: `/user` paths.
    #[serde(rename = "user", alias = "property_user")]
    PropertyUser,
}

impl AccountTier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountTier::Admin => "admin",
            AccountTier::ClientAdmin => "cadmin",
            AccountTier::PropertyUser => "user",
        }
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account tier: {0}")]
pub struct UnknownAccountTier(pub String);

impl FromStr for AccountTier {
    type Err = UnknownAccountTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(AccountTier::Admin),
            "cadmin" => Ok(AccountTier::ClientAdmin),
            "user" | "property_user" => Ok(AccountTier::PropertyUser),
            other => Err(UnknownAccountTier(other.to_string())),
        }
    }
}

fn deserialize_optional_property_id<'de, D>(
    deserializer: D,
) -> Result<Option<PropertyId>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_uuid(deserializer).map(|id| id.map(PropertyId::from))
}

/// Profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Role identifier looked up in the permission table.
    pub user_role: String,
    pub user_type: AccountTier,
    #[serde(default, deserialize_with = "deserialize_optional_property_id")]
    pub property_id: Option<PropertyId>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// `users` table row; `user_type` is stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_role: String,
    pub user_type: String,
    pub property_id: Option<PropertyId>,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = UnknownAccountTier;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            user_type: row.user_type.parse()?,
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            user_role: row.user_role,
            property_id: row.property_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse() {
        assert_eq!("admin".parse::<AccountTier>().unwrap(), AccountTier::Admin);
        assert_eq!(
            "cadmin".parse::<AccountTier>().unwrap(),
            AccountTier::ClientAdmin
        );
        assert_eq!(
            "user".parse::<AccountTier>().unwrap(),
            AccountTier::PropertyUser
        );
        assert_eq!(
            "property_user".parse::<AccountTier>().unwrap(),
            AccountTier::PropertyUser
        );
        assert!("superuser".parse::<AccountTier>().is_err());
    }

    #[test]
    fn test_tier_serde() {
        assert_eq!(
            serde_json::to_string(&AccountTier::ClientAdmin).unwrap(),
            r#""cadmin""#
        );
        let tier: AccountTier = serde_json::from_str(r#""property_user""#).unwrap();
        assert_eq!(tier, AccountTier::PropertyUser);
    }

    #[test]
    fn test_profile_with_empty_property_id() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000007",
            "first_name": "Asha",
            "last_name": "Rao",
            "email": "asha@site.test",
            "user_role": "fire_officer",
            "user_type": "user",
            "property_id": ""
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_type, AccountTier::PropertyUser);
        assert_eq!(profile.property_id, None);
        assert_eq!(profile.full_name(), "Asha Rao");
    }

    #[test]
    fn test_row_with_bad_tier_is_rejected() {
        let row = ProfileRow {
            id: UserId::new(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.test".into(),
            user_role: "helpdesk".into(),
            user_type: "guest".into(),
            property_id: None,
        };
        let err = UserProfile::try_from(row).unwrap_err();
        assert_eq!(err, UnknownAccountTier("guest".to_string()));
    }
}
