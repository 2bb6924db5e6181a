use facilityhub_models::AccountTier;
use facilityhub_nav::{
    ExpandedGroups, LoadedNavigation, Navigator, ProfileSource, PropertySource, Session,
    load_navigation, render_menu,
};
use tracing::{debug, instrument};

use crate::modules::navigation::model::{
    NavigationResponse, PreviewResponse, RolePermissionsResponse, RolesResponse,
};

pub struct NavigationService;

impl NavigationService {
    /// Navigation for the session's user. Never fails: collaborator errors
    /// produce a degraded response.
    #[instrument(skip(navigator, profiles, properties))]
    pub async fn navigation_for(
        navigator: &Navigator,
        profiles: &dyn ProfileSource,
        properties: &dyn PropertySource,
        session: &Session,
        current_path: Option<&str>,
        expanded: &ExpandedGroups,
    ) -> NavigationResponse {
        let loaded = load_navigation(navigator, profiles, properties, session).await;
        Self::respond(&loaded, current_path, expanded)
    }

    fn respond(
        loaded: &LoadedNavigation,
        current_path: Option<&str>,
        expanded: &ExpandedGroups,
    ) -> NavigationResponse {
        let items = loaded.render(current_path, expanded);
        let degraded = loaded.is_degraded();
        let tier = loaded.profile.as_ref().map(|p| p.user_type);

        facilityhub_observability::track_navigation_served(
            tier.map(|t| t.as_str()).unwrap_or("unknown"),
            degraded,
        );

        NavigationResponse {
            user_type: tier,
            user_role: loaded.profile.as_ref().map(|p| p.user_role.clone()),
            avatar: loaded.avatar.clone(),
            items,
            degraded,
        }
    }

    pub fn roles(navigator: &Navigator) -> RolesResponse {
        RolesResponse {
            roles: navigator
                .table()
                .iter()
                .map(|(role, set)| RolePermissionsResponse {
                    role: role.to_string(),
                    unrestricted: set.is_unrestricted(),
                    labels: set.labels().into_iter().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    #[instrument(skip(navigator))]
    pub fn preview(
        navigator: &Navigator,
        role: &str,
        tier: AccountTier,
        current_path: Option<&str>,
    ) -> PreviewResponse {
        let menu = navigator.resolve(tier, role);
        let known_role = navigator.table().contains_role(role);
        debug!(role, %tier, known_role, "Previewing navigation");

        PreviewResponse {
            role: role.to_string(),
            user_type: tier,
            scope: menu.scope,
            known_role,
            restricted: menu.restricted,
            items: render_menu(&menu, current_path, &ExpandedGroups::default()),
        }
    }
}
