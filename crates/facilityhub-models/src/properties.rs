use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::PropertyId;

/// A managed property (site).
///
/// `logo` is a base64-encoded image used only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: Option<String>,
    pub logo: Option<String>,
}

impl Property {
    /// The logo, ignoring blank values.
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|l| !l.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_logo_is_none() {
        let property = Property {
            id: PropertyId::new(),
            name: "Tower A".to_string(),
            address: None,
            logo: Some("  ".to_string()),
        };
        assert_eq!(property.logo(), None);
    }
}
