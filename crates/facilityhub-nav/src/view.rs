//! Rendering with open/active state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::resolver::ResolvedMenu;
use crate::scope::{PLACEHOLDER_PATH, PathScope};
use crate::tree::{NavNode, RouteKey};

/// A rendered menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub label: String,
    pub icon: String,
    /// Scoped route path, or `#` for groups.
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub children: Vec<MenuItem>,
    /// Group is expanded.
    #[serde(default)]
    pub open: bool,
    /// Leaf matches the current path.
    #[serde(default)]
    pub active: bool,
}

impl MenuItem {
    pub fn is_group(&self) -> bool {
        self.path == PLACEHOLDER_PATH
    }
}

/// Groups the user explicitly expanded in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedGroups(BTreeSet<String>);

impl ExpandedGroups {
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn open(&mut self, label: impl Into<String>) {
        self.0.insert(label.into());
    }

    pub fn close(&mut self, label: &str) {
        self.0.remove(label);
    }

    /// Returns the new state.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.0.remove(label) {
            false
        } else {
            self.0.insert(label.to_string());
            true
        }
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Renders `menu` for display.
///
/// Every leaf addressed by `current_path` is marked active and every group
/// above it is opened, in addition to the explicitly `expanded` groups.
/// A leaf can appear twice with the same route (the all-departments shortcut
/// and its entry under "Daily Task Management"); both copies light up.
///
/// A `current_path` under another tier's prefix matches nothing.
pub fn render_menu(
    menu: &ResolvedMenu,
    current_path: Option<&str>,
    expanded: &ExpandedGroups,
) -> Vec<MenuItem> {
    let current = current_path
        .and_then(PathScope::parse)
        .filter(|(scope, _)| *scope == menu.scope)
        .map(|(_, route)| route);

    menu.nodes
        .iter()
        .map(|node| render_node(node, menu.scope, current.as_ref(), expanded))
        .collect()
}

fn render_node(
    node: &NavNode,
    scope: PathScope,
    current: Option<&RouteKey>,
    expanded: &ExpandedGroups,
) -> MenuItem {
    match node {
        NavNode::Leaf(leaf) => MenuItem {
            label: leaf.label.clone(),
            icon: leaf.icon.clone(),
            path: scope.path_for(&leaf.route),
            children: Vec::new(),
            open: false,
            active: current == Some(&leaf.route),
        },
        NavNode::Group(group) => {
            let children: Vec<MenuItem> = group
                .children
                .iter()
                .map(|child| render_node(child, scope, current, expanded))
                .collect();
            let contains_active = children.iter().any(has_active);
            MenuItem {
                label: group.label.clone(),
                icon: group.icon.clone(),
                path: PLACEHOLDER_PATH.to_string(),
                children,
                open: contains_active || expanded.is_open(&group.label),
                active: false,
            }
        }
    }
}

fn has_active(item: &MenuItem) -> bool {
    item.active || item.children.iter().any(has_active)
}
