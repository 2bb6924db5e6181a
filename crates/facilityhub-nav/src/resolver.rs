//! Per-tier resolution.
//!
//! | tier     | role                 | menu                                                  |
//! |----------|----------------------|-------------------------------------------------------|
//! | `admin`  | any                  | universal + full organization tree                    |
//! | `cadmin` | unrestricted         | universal + full client tree                          |
//! | `cadmin` | restricted           | universal + shortcut (unless `admin`) + filtered tree |
//! | `user`   | any                  | universal + filtered client tree, `/user` paths       |

use std::path::Path;
use std::sync::Arc;

use facilityhub_models::{AccountTier, UserProfile};
use tracing::{debug, info};

use crate::catalog::MenuCatalog;
use crate::error::{CatalogError, NavigatorError};
use crate::filter::filter_nodes;
use crate::permissions::{ADMIN_ROLE, PermissionTable};
use crate::scope::PathScope;
use crate::tree::{NavNode, leaves};

/// A resolved, not yet rendered, menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMenu {
    pub tier: AccountTier,
    pub role: String,
    pub scope: PathScope,
    pub nodes: Vec<NavNode>,
    /// Whether the role's permission set pruned the tree.
    pub restricted: bool,
}

impl ResolvedMenu {
    /// Rendered path of every leaf, depth-first.
    pub fn leaf_paths(&self) -> Vec<String> {
        leaves(&self.nodes)
            .into_iter()
            .map(|leaf| self.scope.path_for(&leaf.route))
            .collect()
    }

    pub fn leaf_count(&self) -> usize {
        leaves(&self.nodes).len()
    }
}

/// Resolves the menu for a tier and role.
pub fn resolve(
    tier: AccountTier,
    role: &str,
    table: &PermissionTable,
    catalog: &MenuCatalog,
) -> ResolvedMenu {
    let scope = PathScope::for_tier(tier);
    let permissions = table.permissions_for(role);
    let mut nodes = catalog.universal_items().to_vec();

    let restricted = match tier {
        AccountTier::Admin => {
            nodes.extend_from_slice(catalog.organization_tree());
            false
        }
        AccountTier::ClientAdmin if permissions.is_unrestricted() => {
            nodes.extend_from_slice(catalog.client_tree());
            false
        }
        AccountTier::ClientAdmin => {
            if role != ADMIN_ROLE {
                nodes.push(catalog.all_departments_shortcut().clone());
            }
            nodes.extend(filter_nodes(catalog.client_tree(), permissions));
            true
        }
        AccountTier::PropertyUser => {
            nodes.extend(filter_nodes(catalog.client_tree(), permissions));
            !permissions.is_unrestricted()
        }
    };

    let menu = ResolvedMenu {
        tier,
        role: role.to_string(),
        scope,
        nodes,
        restricted,
    };

    debug!(
        tier = %tier,
        role,
        restricted,
        top_level = menu.nodes.len(),
        leaves = menu.leaf_count(),
        "Resolved navigation"
    );
    metrics::counter!("navigation_resolved_total", "tier" => tier.as_str()).increment(1);

    menu
}

/// Shared handle on the catalog and permission table.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Arc<MenuCatalog>,
    table: Arc<PermissionTable>,
}

impl Navigator {
    pub fn new(catalog: MenuCatalog, table: PermissionTable) -> Self {
        Self {
            catalog: Arc::new(catalog),
            table: Arc::new(table),
        }
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(MenuCatalog::builtin()?, PermissionTable::builtin()))
    }

    /// Built-in catalog with the permission table from `permissions_file`,
    /// or the built-in table when no file is configured.
    pub fn load(permissions_file: Option<&Path>) -> Result<Self, NavigatorError> {
        let catalog = MenuCatalog::builtin()?;
        let table = match permissions_file {
            Some(path) => {
                PermissionTable::from_file(path).map_err(|source| NavigatorError::Permissions {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => PermissionTable::builtin(),
        };
        info!(roles = table.len(), "Navigation permission table ready");
        Ok(Self::new(catalog, table))
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    pub fn resolve(&self, tier: AccountTier, role: &str) -> ResolvedMenu {
        resolve(tier, role, &self.table, &self.catalog)
    }

    pub fn resolve_profile(&self, profile: &UserProfile) -> ResolvedMenu {
        self.resolve(profile.user_type, &profile.user_role)
    }
}
