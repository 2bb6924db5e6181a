//! Loading navigation for a signed-in session.
//!
//! [`load_navigation`] fetches the profile and, for property-scoped tiers,
//! the property logo, then resolves the menu. Collaborator failures never
//! surface as errors: a missing profile yields an empty, degraded
//! navigation and a missing logo falls back to the generic avatar.
//!
//! [`NavigationSession`] adds stale-result protection on top. Every load
//! takes a new generation number; a load that finishes after a newer one
//! started (or after [`NavigationSession::clear`]) is discarded.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use facilityhub_models::{AccountTier, Property, PropertyId, UserId, UserProfile};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

use crate::error::SourceError;
use crate::resolver::{Navigator, ResolvedMenu};
use crate::view::{ExpandedGroups, MenuItem, render_menu};

/// Authenticated caller: user id plus the bearer token used for lookups.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub token: String,
}

impl Session {
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: token.into(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Profile of `user_id`, looked up on behalf of `session`.
    async fn profile(&self, session: &Session, user_id: UserId) -> Result<UserProfile, SourceError>;
}

#[async_trait]
pub trait PropertySource: Send + Sync {
    async fn property(&self, id: PropertyId) -> Result<Property, SourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Avatar {
    /// Base64-encoded property logo.
    Logo { data: String },
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNavigation {
    /// `None` when the profile could not be fetched.
    pub profile: Option<UserProfile>,
    pub menu: Option<ResolvedMenu>,
    pub avatar: Avatar,
}

impl LoadedNavigation {
    pub fn degraded() -> Self {
        Self {
            profile: None,
            menu: None,
            avatar: Avatar::Generic,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.profile.is_none()
    }

    /// Rendered items; empty for a degraded navigation.
    pub fn render(&self, current_path: Option<&str>, expanded: &ExpandedGroups) -> Vec<MenuItem> {
        self.menu
            .as_ref()
            .map(|menu| render_menu(menu, current_path, expanded))
            .unwrap_or_default()
    }
}

fn record_failure(source: &'static str) {
    metrics::counter!("navigation_source_failures_total", "source" => source).increment(1);
}

/// Loads and resolves navigation for `session`.
#[instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn load_navigation(
    navigator: &Navigator,
    profiles: &dyn ProfileSource,
    properties: &dyn PropertySource,
    session: &Session,
) -> LoadedNavigation {
    let profile = match profiles.profile(session, session.user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "Profile fetch failed, serving empty navigation");
            record_failure("profile");
            return LoadedNavigation::degraded();
        }
    };

    let avatar = match (profile.user_type, profile.property_id) {
        (AccountTier::Admin, _) | (_, None) => Avatar::Generic,
        (_, Some(property_id)) => match properties.property(property_id).await {
            Ok(property) => match property.logo() {
                Some(logo) => Avatar::Logo {
                    data: logo.to_string(),
                },
                None => Avatar::Generic,
            },
            Err(e) => {
                warn!(%property_id, error = %e, "Property logo fetch failed, using generic avatar");
                record_failure("property");
                Avatar::Generic
            }
        },
    };

    let menu = navigator.resolve_profile(&profile);
    LoadedNavigation {
        profile: Some(profile),
        menu: Some(menu),
        avatar,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load or a clear happened while this one was fetching.
    Stale,
}

/// Current navigation of one client session.
pub struct NavigationSession {
    navigator: Navigator,
    profiles: Arc<dyn ProfileSource>,
    properties: Arc<dyn PropertySource>,
    generation: AtomicU64,
    current: RwLock<Option<LoadedNavigation>>,
}

impl NavigationSession {
    pub fn new(
        navigator: Navigator,
        profiles: Arc<dyn ProfileSource>,
        properties: Arc<dyn PropertySource>,
    ) -> Self {
        Self {
            navigator,
            profiles,
            properties,
            generation: AtomicU64::new(0),
            current: RwLock::new(None),
        }
    }

    pub async fn load(&self, session: &Session) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let loaded = load_navigation(
            &self.navigator,
            self.profiles.as_ref(),
            self.properties.as_ref(),
            session,
        )
        .await;

        let mut current = self.current.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Discarding stale navigation load");
            return LoadOutcome::Stale;
        }
        *current = Some(loaded);
        LoadOutcome::Applied
    }

    /// Forgets the current navigation and invalidates in-flight loads.
    pub async fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.current.write().await = None;
    }

    pub async fn current(&self) -> Option<LoadedNavigation> {
        self.current.read().await.clone()
    }
}

impl fmt::Debug for NavigationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSession")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryDirectory;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn profile(role: &str, tier: AccountTier, property_id: Option<PropertyId>) -> UserProfile {
        UserProfile {
            id: UserId::new(),
            first_name: "Test".into(),
            last_name: "User".into(),
            email: format!("{role}@facilityhub.test"),
            user_role: role.into(),
            user_type: tier,
            property_id,
        }
    }

    fn property(logo: Option<&str>) -> Property {
        Property {
            id: PropertyId::new(),
            name: "Tower A".into(),
            address: Some("1 Main Road".into()),
            logo: logo.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_load_user_with_logo() {
        let directory = InMemoryDirectory::new();
        let site = property(Some("aGVsbG8="));
        let user = profile("helpdesk", AccountTier::PropertyUser, Some(site.id));
        directory.insert_property(site);
        directory.insert_profile(user.clone());

        let loaded = load_navigation(
            &Navigator::builtin().unwrap(),
            &directory,
            &directory,
            &Session::new(user.id, "token"),
        )
        .await;

        assert!(!loaded.is_degraded());
        assert_eq!(
            loaded.avatar,
            Avatar::Logo {
                data: "aGVsbG8=".into()
            }
        );
        let items = loaded.render(None, &ExpandedGroups::default());
        assert_eq!(items[0].path, "/user/dashboard");
    }

    #[tokio::test]
    async fn test_profile_failure_degrades() {
        let directory = InMemoryDirectory::new();
        let loaded = load_navigation(
            &Navigator::builtin().unwrap(),
            &directory,
            &directory,
            &Session::new(UserId::new(), "token"),
        )
        .await;

        assert!(loaded.is_degraded());
        assert_eq!(loaded.avatar, Avatar::Generic);
        assert!(loaded.render(None, &ExpandedGroups::default()).is_empty());
    }

    #[tokio::test]
    async fn test_logo_failure_falls_back_to_generic() {
        let directory = InMemoryDirectory::new();
        let site = property(Some("aGVsbG8="));
        let user = profile("fire_officer", AccountTier::ClientAdmin, Some(site.id));
        directory.insert_property(site);
        directory.insert_profile(user.clone());
        directory.set_properties_failing(true);

        let loaded = load_navigation(
            &Navigator::builtin().unwrap(),
            &directory,
            &directory,
            &Session::new(user.id, "token"),
        )
        .await;

        assert!(!loaded.is_degraded());
        assert_eq!(loaded.avatar, Avatar::Generic);
        assert!(loaded.menu.unwrap().restricted);
    }

    #[tokio::test]
    async fn test_org_admin_skips_logo() {
        let directory = InMemoryDirectory::new();
        let site = property(Some("aGVsbG8="));
        let admin = profile("admin", AccountTier::Admin, Some(site.id));
        directory.insert_property(site);
        directory.insert_profile(admin.clone());

        let loaded = load_navigation(
            &Navigator::builtin().unwrap(),
            &directory,
            &directory,
            &Session::new(admin.id, "token"),
        )
        .await;
        assert_eq!(loaded.avatar, Avatar::Generic);
    }

    /// Blocks the first profile lookup until released.
    struct GatedProfiles {
        first: UserProfile,
        second: UserProfile,
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    #[async_trait]
    impl ProfileSource for GatedProfiles {
        async fn profile(&self, _: &Session, _: UserId) -> Result<UserProfile, SourceError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.entered.notify_one();
                self.release.notified().await;
                Ok(self.first.clone())
            } else {
                Ok(self.second.clone())
            }
        }
    }

    fn gated() -> Arc<GatedProfiles> {
        Arc::new(GatedProfiles {
            first: profile("helpdesk", AccountTier::PropertyUser, None),
            second: profile("store_keeper", AccountTier::PropertyUser, None),
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let profiles = gated();
        let session = Arc::new(NavigationSession::new(
            Navigator::builtin().unwrap(),
            profiles.clone(),
            Arc::new(InMemoryDirectory::new()),
        ));

        let slow = {
            let session = session.clone();
            tokio::spawn(async move { session.load(&Session::new(UserId::new(), "a")).await })
        };
        profiles.entered.notified().await;

        let fast = session.load(&Session::new(UserId::new(), "b")).await;
        assert_eq!(fast, LoadOutcome::Applied);

        profiles.release.notify_one();
        assert_eq!(slow.await.unwrap(), LoadOutcome::Stale);

        let current = session.current().await.unwrap();
        assert_eq!(current.profile.unwrap().user_role, "store_keeper");
    }

    #[tokio::test]
    async fn test_clear_invalidates_in_flight_load() {
        let profiles = gated();
        let session = Arc::new(NavigationSession::new(
            Navigator::builtin().unwrap(),
            profiles.clone(),
            Arc::new(InMemoryDirectory::new()),
        ));

        let slow = {
            let session = session.clone();
            tokio::spawn(async move { session.load(&Session::new(UserId::new(), "a")).await })
        };
        profiles.entered.notified().await;

        session.clear().await;
        profiles.release.notify_one();

        assert_eq!(slow.await.unwrap(), LoadOutcome::Stale);
        assert!(session.current().await.is_none());
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session::new(UserId::new(), "secret-token");
        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-token"));
    }
}
