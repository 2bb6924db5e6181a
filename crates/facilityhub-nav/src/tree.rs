//! Navigation tree.
//!
//! A node is either a navigable [`NavLeaf`] carrying a tier-independent
//! [`RouteKey`], or a [`NavGroup`] that only expands a submenu. Groups never
//! carry a route, so the "expandable node with a real path" state cannot be
//! represented. [`NavTree::new`] checks the remaining invariants: labels are
//! non-blank and unique across the tree, groups are non-empty, and no two
//! leaves share a route.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::CatalogError;

/// Tier-independent route identifier such as `gate/visitor-logs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RouteKey(Cow<'static, str>);

impl RouteKey {
    /// Leading and trailing slashes are stripped.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        let key = key.into();
        let trimmed = key.trim_matches('/');
        if trimmed.len() == key.len() {
            Self(key)
        } else {
            Self(Cow::Owned(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLeaf {
    pub label: String,
    pub icon: String,
    pub route: RouteKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub label: String,
    pub icon: String,
    pub children: Vec<NavNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    Leaf(NavLeaf),
    Group(NavGroup),
}

impl NavNode {
    pub fn leaf(label: impl Into<String>, icon: impl Into<String>, route: RouteKey) -> Self {
        NavNode::Leaf(NavLeaf {
            label: label.into(),
            icon: icon.into(),
            route,
        })
    }

    pub fn group(label: impl Into<String>, icon: impl Into<String>, children: Vec<NavNode>) -> Self {
        NavNode::Group(NavGroup {
            label: label.into(),
            icon: icon.into(),
            children,
        })
    }

    pub fn label(&self) -> &str {
        match self {
            NavNode::Leaf(leaf) => &leaf.label,
            NavNode::Group(group) => &group.label,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            NavNode::Leaf(leaf) => &leaf.icon,
            NavNode::Group(group) => &group.icon,
        }
    }

    /// Empty for leaves.
    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Leaf(_) => &[],
            NavNode::Group(group) => &group.children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavNode::Group(_))
    }

    pub fn route(&self) -> Option<&RouteKey> {
        match self {
            NavNode::Leaf(leaf) => Some(&leaf.route),
            NavNode::Group(_) => None,
        }
    }
}

/// All leaves below `nodes`, depth-first in menu order.
pub fn leaves(nodes: &[NavNode]) -> Vec<&NavLeaf> {
    fn walk<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a NavLeaf>) {
        for node in nodes {
            match node {
                NavNode::Leaf(leaf) => out.push(leaf),
                NavNode::Group(group) => walk(&group.children, out),
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, &mut out);
    out
}

pub fn leaf_labels(nodes: &[NavNode]) -> BTreeSet<&str> {
    leaves(nodes).into_iter().map(|l| l.label.as_str()).collect()
}

/// Finds a node by label at any depth.
pub fn find<'a>(nodes: &'a [NavNode], label: &str) -> Option<&'a NavNode> {
    nodes.iter().find_map(|node| {
        if node.label() == label {
            Some(node)
        } else {
            find(node.children(), label)
        }
    })
}

/// A validated tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    nodes: Vec<NavNode>,
}

impl NavTree {
    pub fn new(nodes: Vec<NavNode>) -> Result<Self, CatalogError> {
        let mut labels = HashSet::new();
        let mut routes = HashSet::new();
        validate(&nodes, &mut labels, &mut routes)?;
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NavNode> {
        self.nodes
    }
}

fn validate<'a>(
    nodes: &'a [NavNode],
    labels: &mut HashSet<&'a str>,
    routes: &mut HashSet<&'a RouteKey>,
) -> Result<(), CatalogError> {
    for node in nodes {
        let label = node.label();
        if label.trim().is_empty() {
            return Err(CatalogError::BlankLabel);
        }
        if !labels.insert(label) {
            return Err(CatalogError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        match node {
            NavNode::Leaf(leaf) => {
                if !routes.insert(&leaf.route) {
                    return Err(CatalogError::DuplicateRoute {
                        route: leaf.route.to_string(),
                    });
                }
            }
            NavNode::Group(group) => {
                if group.children.is_empty() {
                    return Err(CatalogError::EmptyGroup {
                        label: group.label.clone(),
                    });
                }
                validate(&group.children, labels, routes)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str, route: &'static str) -> NavNode {
        NavNode::leaf(label, "dot", RouteKey::new(route))
    }

    #[test]
    fn test_route_key_trims_slashes() {
        assert_eq!(RouteKey::new("/gate/visitor-logs/").as_str(), "gate/visitor-logs");
        assert_eq!(RouteKey::new("dashboard").as_str(), "dashboard");
    }

    #[test]
    fn test_valid_nested_tree() {
        let tree = NavTree::new(vec![
            leaf("Dashboard", "dashboard"),
            NavNode::group(
                "Work Permit",
                "permit",
                vec![NavNode::group(
                    "Work Permits",
                    "permit",
                    vec![leaf("Hot Work Permit", "permits/hot-work")],
                )],
            ),
        ])
        .unwrap();

        assert_eq!(tree.nodes().len(), 2);
        assert_eq!(
            leaf_labels(tree.nodes()),
            BTreeSet::from(["Dashboard", "Hot Work Permit"])
        );
        assert!(find(tree.nodes(), "Work Permits").unwrap().is_group());
    }

    #[test]
    fn test_empty_group_rejected() {
        let err = NavTree::new(vec![NavNode::group("Helpdesk", "help", vec![])]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyGroup {
                label: "Helpdesk".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_label_rejected_across_levels() {
        let err = NavTree::new(vec![
            leaf("Complaints", "helpdesk/complaints"),
            NavNode::group("Helpdesk", "help", vec![leaf("Complaints", "helpdesk/other")]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateLabel {
                label: "Complaints".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let err = NavTree::new(vec![leaf("A", "same"), leaf("B", "/same")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateRoute {
                route: "same".to_string()
            }
        );
    }

    #[test]
    fn test_blank_label_rejected() {
        assert_eq!(
            NavTree::new(vec![leaf("  ", "x")]).unwrap_err(),
            CatalogError::BlankLabel
        );
    }
}
