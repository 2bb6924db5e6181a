use tracing::trace;

use crate::permissions::PermissionSet;
use crate::tree::{NavGroup, NavNode};

/// Prunes `nodes` to what `permissions` grants, preserving order.
///
/// A node whose own label is granted is kept whole, including every
/// descendant of a granted group. Other groups keep only their granted
/// descendants and disappear when none remain. Ungranted leaves are dropped.
pub fn filter_nodes(nodes: &[NavNode], permissions: &PermissionSet) -> Vec<NavNode> {
    match permissions {
        PermissionSet::Unrestricted => nodes.to_vec(),
        PermissionSet::Labels(_) => nodes
            .iter()
            .filter_map(|node| filter_node(node, permissions))
            .collect(),
    }
}

fn filter_node(node: &NavNode, permissions: &PermissionSet) -> Option<NavNode> {
    if permissions.contains(node.label()) {
        if node.is_group() {
            trace!(group = node.label(), "Group granted by label");
        }
        return Some(node.clone());
    }

    match node {
        NavNode::Leaf(_) => None,
        NavNode::Group(group) => {
            let children = filter_nodes(&group.children, permissions);
            if children.is_empty() {
                None
            } else {
                Some(NavNode::Group(NavGroup {
                    label: group.label.clone(),
                    icon: group.icon.clone(),
                    children,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::permissions::PermissionTable;
    use crate::tree::{RouteKey, find, leaf_labels, leaves};

    fn sample() -> Vec<NavNode> {
        vec![
            NavNode::group(
                "Helpdesk",
                "help",
                vec![
                    NavNode::leaf("Complaints", "dot", RouteKey::new("helpdesk/complaints")),
                    NavNode::leaf("Service Requests", "dot", RouteKey::new("helpdesk/requests")),
                ],
            ),
            NavNode::group(
                "Vendor Management",
                "vendor",
                vec![NavNode::leaf("Vendor Master", "dot", RouteKey::new("vendors/master"))],
            ),
        ]
    }

    #[test]
    fn test_unrestricted_returns_input() {
        let nodes = sample();
        assert_eq!(filter_nodes(&nodes, &PermissionSet::Unrestricted), nodes);
    }

    #[test]
    fn test_leaf_grant_keeps_parent_partially() {
        let nodes = sample();
        let out = filter_nodes(&nodes, &PermissionSet::from_labels(["Complaints"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label(), "Helpdesk");
        assert_eq!(out[0].children().len(), 1);
        assert_eq!(out[0].children()[0].label(), "Complaints");
    }

    #[test]
    fn test_group_grant_keeps_whole_subtree() {
        let nodes = sample();
        let out = filter_nodes(&nodes, &PermissionSet::from_labels(["Helpdesk"]));
        assert_eq!(out, vec![nodes[0].clone()]);
    }

    #[test]
    fn test_no_grant_yields_empty() {
        let out = filter_nodes(&sample(), &PermissionSet::from_labels(["Unrelated"]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let nodes = sample();
        let before = nodes.clone();
        let _ = filter_nodes(&nodes, &PermissionSet::from_labels(["Complaints"]));
        assert_eq!(nodes, before);
    }

    #[test]
    fn test_filter_is_idempotent_for_every_builtin_role() {
        let catalog = MenuCatalog::builtin().unwrap();
        let table = PermissionTable::builtin();
        for (role, set) in table.iter() {
            let once = filter_nodes(catalog.client_tree(), set);
            let twice = filter_nodes(&once, set);
            assert_eq!(once, twice, "{role}");
        }
    }

    #[test]
    fn test_restricted_results_only_hold_granted_leaves() {
        let catalog = MenuCatalog::builtin().unwrap();
        let table = PermissionTable::builtin();
        for (role, set) in table.iter().filter(|(_, s)| !s.is_unrestricted()) {
            let out = filter_nodes(catalog.client_tree(), set);
            assert!(!out.is_empty(), "{role} resolved to nothing");
            for node in &out {
                assert_granted(node, set, false, role);
            }
        }
    }

    fn assert_granted(node: &NavNode, set: &PermissionSet, inherited: bool, role: &str) {
        let granted = inherited || set.contains(node.label());
        match node {
            NavNode::Leaf(leaf) => assert!(granted, "{role}: leaf {} not granted", leaf.label),
            NavNode::Group(group) => {
                assert!(!group.children.is_empty(), "{role}: empty group {}", group.label);
                for child in &group.children {
                    assert_granted(child, set, granted, role);
                }
            }
        }
    }

    #[test]
    fn test_nested_group_grant() {
        let catalog = MenuCatalog::builtin().unwrap();
        let out = filter_nodes(
            catalog.client_tree(),
            &PermissionSet::from_labels(["Work Permits"]),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label(), "Work Permit");
        let full = find(catalog.client_tree(), "Work Permit").unwrap();
        assert_eq!(&out[0], full);
        assert_eq!(leaves(&out).len(), 6);
        assert!(leaf_labels(&out).contains("Excavation Permit"));
    }
}
