//! Tier path scopes.
//!
//! Every tier serves the same route keys under its own prefix:
//!
//! | scope          | prefix    | example                      |
//! |----------------|-----------|------------------------------|
//! | Organization   | (none)    | `/gate/visitor-logs`         |
//! | Client         | `/cadmin` | `/cadmin/gate/visitor-logs`  |
//! | PropertyUser   | `/user`   | `/user/gate/visitor-logs`    |
//!
//! Paths are computed from route keys, never by editing other paths, so a
//! route that happens to contain `cadmin` somewhere in the middle is left
//! alone.

use facilityhub_models::AccountTier;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::tree::{NavNode, RouteKey};

/// Path rendered for groups, which expand a submenu instead of navigating.
pub const PLACEHOLDER_PATH: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PathScope {
    Organization,
    Client,
    PropertyUser,
}

impl PathScope {
    pub const ALL: [PathScope; 3] = [
        PathScope::Organization,
        PathScope::Client,
        PathScope::PropertyUser,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            PathScope::Organization => "",
            PathScope::Client => "/cadmin",
            PathScope::PropertyUser => "/user",
        }
    }

    pub const fn for_tier(tier: AccountTier) -> Self {
        match tier {
            AccountTier::Admin => PathScope::Organization,
            AccountTier::ClientAdmin => PathScope::Client,
            AccountTier::PropertyUser => PathScope::PropertyUser,
        }
    }

    pub fn path_for(self, route: &RouteKey) -> String {
        format!("{}/{}", self.prefix(), route)
    }

    /// Leaf path, or the placeholder for groups.
    pub fn node_path(self, node: &NavNode) -> String {
        match node.route() {
            Some(route) => self.path_for(route),
            None => PLACEHOLDER_PATH.to_string(),
        }
    }

    /// Splits an absolute path into its scope and route key.
    ///
    /// Only a leading `/cadmin/` or `/user/` segment selects a scoped tier.
    /// Returns `None` for the placeholder, relative paths and bare prefixes.
    pub fn parse(path: &str) -> Option<(PathScope, RouteKey)> {
        let path = path.trim();
        let rest = path.strip_prefix('/')?;
        let rest = rest.trim_end_matches('/');
        if rest.is_empty() {
            return None;
        }

        for scope in [PathScope::Client, PathScope::PropertyUser] {
            let segment = &scope.prefix()[1..];
            if rest == segment {
                return None;
            }
            if let Some(route) = rest
                .strip_prefix(segment)
                .and_then(|r| r.strip_prefix('/'))
            {
                return Some((scope, RouteKey::new(route.to_string())));
            }
        }

        Some((PathScope::Organization, RouteKey::new(rest.to_string())))
    }
}
