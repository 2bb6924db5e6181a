use facilityhub_core::serde::deserialize_comma_list;
use facilityhub_models::AccountTier;
use facilityhub_nav::{Avatar, MenuItem, PathScope};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// Route currently shown, e.g. `/cadmin/fire-safety/drills`.
    #[validate(length(max = 512))]
    pub current_path: Option<String>,
    /// Comma separated labels of groups the user expanded.
    #[serde(default, deserialize_with = "deserialize_comma_list")]
    #[param(value_type = Option<String>)]
    #[validate(length(max = 64))]
    pub expanded: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    /// Absent when the profile could not be loaded.
    pub user_type: Option<AccountTier>,
    pub user_role: Option<String>,
    pub avatar: Avatar,
    pub items: Vec<MenuItem>,
    /// True when the profile lookup failed and an empty menu is served.
    pub degraded: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RolePermissionsResponse {
    pub role: String,
    pub unrestricted: bool,
    /// Granted labels; `["All Pages"]` for unrestricted roles.
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RolesResponse {
    pub roles: Vec<RolePermissionsResponse>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PreviewQuery {
    /// Account tier to preview for (default `cadmin`).
    #[serde(default = "default_preview_tier")]
    #[param(value_type = Option<String>)]
    pub tier: AccountTier,
    #[validate(length(max = 512))]
    pub current_path: Option<String>,
}

fn default_preview_tier() -> AccountTier {
    AccountTier::ClientAdmin
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreviewResponse {
    pub role: String,
    pub user_type: AccountTier,
    pub scope: PathScope,
    /// Whether the role exists in the permission table.
    pub known_role: bool,
    pub restricted: bool,
    pub items: Vec<MenuItem>,
}
