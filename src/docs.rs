use facilityhub_models::{AccountTier, Property, UserProfile};
use facilityhub_nav::{Avatar, MenuItem, PathScope};
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::navigation::model::{
    NavigationResponse, PreviewResponse, RolePermissionsResponse, RolesResponse,
};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::list_roles,
        crate::modules::navigation::controller::preview_role,
        crate::modules::profiles::controller::get_my_profile,
        crate::modules::profiles::controller::get_profile_by_id,
        crate::modules::properties::controller::get_property,
    ),
    components(
        schemas(
            AccountTier,
            Avatar,
            ErrorResponse,
            MenuItem,
            NavigationResponse,
            PathScope,
            PreviewResponse,
            Property,
            RolePermissionsResponse,
            RolesResponse,
            UserProfile,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Navigation", description = "Role-based sidebar navigation"),
        (name = "Profiles", description = "User profile lookups"),
        (name = "Properties", description = "Property details and branding")
    ),
    info(
        title = "FacilityHub API",
        version = "0.1.0",
        description = "Role-based navigation for the FacilityHub facility management dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
