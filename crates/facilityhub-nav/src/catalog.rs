//! The built-in menu catalog.
//!
//! One validated tree serves both the organization and the client menus;
//! they differ only in the path scope applied when rendering, so a leaf in
//! one always has a twin with the same label and route in the other.

use crate::error::CatalogError;
use crate::tree::{NavNode, NavTree, RouteKey, leaves};

pub const DASHBOARD: &str = "Dashboard";
pub const PROFILE: &str = "Profile";
/// Leaf label granted to most restricted roles and pinned on the cadmin menu.
pub const ALL_DEPARTMENTS_TASKS: &str = "Daily Task Management of all department";

fn leaf(label: &str, icon: &str, route: &'static str) -> NavNode {
    NavNode::leaf(label, icon, RouteKey::new(route))
}

fn group(label: &str, icon: &str, children: Vec<NavNode>) -> NavNode {
    NavNode::group(label, icon, children)
}

fn builtin_nodes() -> Vec<NavNode> {
    vec![
        group(
            "Gate Management",
            "door-open",
            vec![
                leaf("Visitor Logs", "circle", "gate/visitor-logs"),
                leaf("Inward Material Register", "circle", "gate/inward-material"),
                leaf("Outward Material Register", "circle", "gate/outward-material"),
                leaf("Vehicle Logs", "circle", "gate/vehicle-logs"),
                leaf("Key Register", "circle", "gate/key-register"),
            ],
        ),
        group(
            "Inventory Management",
            "boxes",
            vec![
                leaf("Inventory Master", "circle", "inventory/master"),
                leaf("Stock Inward", "circle", "inventory/stock-inward"),
                leaf("Stock Issue", "circle", "inventory/stock-issue"),
                leaf("Inventory Reports", "circle", "inventory/reports"),
            ],
        ),
        group(
            "Vendor Management",
            "handshake",
            vec![
                leaf("Vendor Master", "circle", "vendors/master"),
                leaf("Vendor Contracts", "circle", "vendors/contracts"),
                leaf("Vendor Evaluation", "circle", "vendors/evaluation"),
            ],
        ),
        group(
            "Project Management",
            "kanban",
            vec![
                leaf("Projects", "circle", "projects"),
                leaf("Project Milestones", "circle", "projects/milestones"),
            ],
        ),
        group(
            "Escalation Matrix",
            "trending-up",
            vec![
                leaf("Escalation Matrix Setup", "circle", "escalation/setup"),
                leaf("Escalation Log", "circle", "escalation/log"),
            ],
        ),
        group(
            "Daily Task Management",
            "calendar-check",
            vec![
                leaf(ALL_DEPARTMENTS_TASKS, "circle", "daily-tasks/all-departments"),
                leaf("Housekeeping Daily Checklist", "circle", "daily-tasks/housekeeping"),
                leaf("Technical Daily Checklist", "circle", "daily-tasks/technical"),
                leaf("Security Daily Checklist", "circle", "daily-tasks/security"),
            ],
        ),
        group(
            "Monthly Task Management",
            "calendar-range",
            vec![
                leaf("Monthly Checklist", "circle", "monthly-tasks/checklist"),
                leaf("Monthly Maintenance Schedule", "circle", "monthly-tasks/maintenance"),
                leaf("Monthly Consumption Report", "circle", "monthly-tasks/consumption"),
            ],
        ),
        group(
            "Patrolling Report",
            "footprints",
            vec![
                leaf(
                    "Facility or Technical team Patrolling Report",
                    "circle",
                    "patrolling/technical",
                ),
                leaf("Security Patrolling Report", "circle", "patrolling/security"),
            ],
        ),
        group(
            "Fire and Safety",
            "flame",
            vec![
                leaf("Fire Extinguisher Inspection", "circle", "fire-safety/extinguishers"),
                leaf("Fire Drill Report", "circle", "fire-safety/drills"),
                leaf("Fire Alarm System Checklist", "circle", "fire-safety/alarm-system"),
                group(
                    "Safety Inspections",
                    "shield-check",
                    vec![
                        leaf("Hydrant Inspection", "circle", "fire-safety/inspections/hydrant"),
                        leaf(
                            "Sprinkler Inspection",
                            "circle",
                            "fire-safety/inspections/sprinkler",
                        ),
                    ],
                ),
            ],
        ),
        group(
            "Work Permit",
            "file-signature",
            vec![group(
                "Work Permits",
                "file-text",
                vec![
                    leaf("Hot Work Permit", "circle", "work-permits/hot-work"),
                    leaf("Cold Work Permit", "circle", "work-permits/cold-work"),
                    leaf("Height Work Permit", "circle", "work-permits/height-work"),
                    leaf("Electrical Work Permit", "circle", "work-permits/electrical"),
                    leaf("Confined Space Permit", "circle", "work-permits/confined-space"),
                    leaf("Excavation Permit", "circle", "work-permits/excavation"),
                ],
            )],
        ),
        group(
            "Inspection Checklists",
            "clipboard-list",
            vec![
                leaf("Lift Inspection", "circle", "inspections/lift"),
                leaf("DG Set Inspection", "circle", "inspections/dg-set"),
                leaf("STP Inspection", "circle", "inspections/stp"),
                leaf("Water Tank Cleaning", "circle", "inspections/water-tank"),
            ],
        ),
        group(
            "Helpdesk",
            "headset",
            vec![
                leaf("Complaints", "circle", "helpdesk/complaints"),
                leaf("Service Requests", "circle", "helpdesk/service-requests"),
            ],
        ),
    ]
}

/// Validated menu catalog shared by every resolution.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    tree: NavTree,
    universal: Vec<NavNode>,
    shortcut: NavNode,
}

impl MenuCatalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_tree(NavTree::new(builtin_nodes())?)
    }

    /// Wraps a custom tree. Dashboard and Profile must not collide with its
    /// labels or routes.
    pub fn from_tree(tree: NavTree) -> Result<Self, CatalogError> {
        let universal = vec![
            leaf(DASHBOARD, "layout-dashboard", "dashboard"),
            leaf(PROFILE, "user", "profile"),
        ];

        // Re-validate with the universal items in front so collisions surface
        // here and not as duplicate entries in a rendered menu.
        let mut combined = universal.clone();
        combined.extend(tree.nodes().iter().cloned());
        NavTree::new(combined)?;

        let shortcut = leaves(tree.nodes())
            .into_iter()
            .find(|l| l.label == ALL_DEPARTMENTS_TASKS)
            .map(|l| NavNode::Leaf(l.clone()))
            .unwrap_or_else(|| {
                leaf(ALL_DEPARTMENTS_TASKS, "list-checks", "daily-tasks/all-departments")
            });

        Ok(Self {
            tree,
            universal,
            shortcut,
        })
    }

    /// Organization-admin tree. Rendered without a path prefix.
    pub fn organization_tree(&self) -> &[NavNode] {
        self.tree.nodes()
    }

    /// Client-admin tree. Rendered under `/cadmin`.
    pub fn client_tree(&self) -> &[NavNode] {
        self.tree.nodes()
    }

    /// Dashboard and Profile, prepended to every menu.
    pub fn universal_items(&self) -> &[NavNode] {
        &self.universal
    }

    pub fn all_departments_shortcut(&self) -> &NavNode {
        &self.shortcut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::find;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = MenuCatalog::builtin().unwrap();
        let top: Vec<&str> = catalog.organization_tree().iter().map(|n| n.label()).collect();
        assert_eq!(
            top,
            vec![
                "Gate Management",
                "Inventory Management",
                "Vendor Management",
                "Project Management",
                "Escalation Matrix",
                "Daily Task Management",
                "Monthly Task Management",
                "Patrolling Report",
                "Fire and Safety",
                "Work Permit",
                "Inspection Checklists",
                "Helpdesk",
            ]
        );
        assert!(catalog.organization_tree().iter().all(|n| n.is_group()));
    }

    #[test]
    fn test_three_level_nesting() {
        let catalog = MenuCatalog::builtin().unwrap();
        let permits = find(catalog.client_tree(), "Work Permits").unwrap();
        assert!(permits.is_group());
        assert_eq!(permits.children().len(), 6);
        let inspections = find(catalog.client_tree(), "Safety Inspections").unwrap();
        assert_eq!(inspections.children().len(), 2);
    }

    #[test]
    fn test_shortcut_reuses_catalog_route() {
        let catalog = MenuCatalog::builtin().unwrap();
        let shortcut = catalog.all_departments_shortcut();
        assert_eq!(shortcut.label(), ALL_DEPARTMENTS_TASKS);
        assert_eq!(
            shortcut.route().map(|r| r.as_str()),
            Some("daily-tasks/all-departments")
        );
    }

    #[test]
    fn test_custom_tree_colliding_with_dashboard_rejected() {
        let tree = NavTree::new(vec![leaf(DASHBOARD, "x", "home")]).unwrap();
        assert_eq!(
            MenuCatalog::from_tree(tree).unwrap_err(),
            CatalogError::DuplicateLabel {
                label: DASHBOARD.to_string()
            }
        );
    }
}
