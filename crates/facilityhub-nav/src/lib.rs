//! # FacilityHub Navigation
//!
//! Computes the sidebar menu a user may see.
//!
//! ```text
//! Session ──► ProfileSource ──► UserProfile { user_type, user_role, property_id }
//!                                   │
//!               MenuCatalog ────────┤  organization / client tree
//!               PermissionTable ────┤  role ──► PermissionSet
//!                                   ▼
//!                        filter ──► rescope ──► ResolvedMenu ──► render ──► MenuItem[]
//! ```
//!
//! - [`tree`]: the tagged [`NavNode`] tree and its construction-time checks
//! - [`scope`]: tier path prefixes and route keys
//! - [`catalog`]: the built-in menu
//! - [`permissions`]: role permission table
//! - [`filter`]: permission pruning
//! - [`resolver`]: per-tier resolution entry point
//! - [`view`]: open/active bookkeeping for rendering
//! - [`session`]: profile/logo loading with stale-result protection
//!
//! # Example
//!
//! ```ignore
//! use facilityhub_models::AccountTier;
//! use facilityhub_nav::{Navigator, render_menu, ExpandedGroups};
//!
//! let navigator = Navigator::builtin()?;
//! let menu = navigator.resolve(AccountTier::ClientAdmin, "fire_officer");
//! let items = render_menu(&menu, Some("/cadmin/dashboard"), &ExpandedGroups::default());
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod permissions;
pub mod resolver;
pub mod scope;
pub mod session;
pub mod tree;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use catalog::MenuCatalog;
pub use error::{CatalogError, NavigatorError, PermissionTableError, SourceError};
pub use filter::filter_nodes;
pub use permissions::{ADMIN_ROLE, ALL_PAGES, PermissionSet, PermissionTable};
pub use resolver::{Navigator, ResolvedMenu, resolve};
pub use scope::{PLACEHOLDER_PATH, PathScope};
pub use session::{
    Avatar, LoadOutcome, LoadedNavigation, NavigationSession, ProfileSource, PropertySource,
    Session, load_navigation,
};
pub use tree::{NavGroup, NavLeaf, NavNode, NavTree, RouteKey};
pub use view::{ExpandedGroups, MenuItem, render_menu};
