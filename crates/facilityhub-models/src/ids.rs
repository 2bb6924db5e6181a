//! Strongly-typed ID newtypes.
//!
//! ```ignore
//! fn load_property(id: PropertyId) { /* ... */ }
//!
//! load_property(PropertyId::new());   // OK
//! // load_property(UserId::new());    // Compile error
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = String, format = "uuid")]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifies a user account.
    UserId
);

define_id!(
    /// Identifies a property (site) a scoped user is assigned to.
    PropertyId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_debug_and_display() {
        let id = UserId::from_u128(0x12345678_1234_1234_1234_123456789abc);
        assert_eq!(format!("{}", id), "12345678-1234-1234-1234-123456789abc");
        assert!(format!("{:?}", id).starts_with("UserId("));
    }

    #[test]
    fn test_id_from_str() {
        let id: PropertyId = " 12345678-1234-1234-1234-123456789abc".parse().unwrap();
        assert_eq!(
            id.into_inner(),
            Uuid::from_u128(0x12345678_1234_1234_1234_123456789abc)
        );
        assert!("invalid".parse::<PropertyId>().is_err());
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = PropertyId::from_u128(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""00000000-0000-0000-0000-000000000001""#);
        let back: PropertyId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
