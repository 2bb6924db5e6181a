//! Role permission table.
//!
//! Each role maps to the set of menu labels it may open. The sentinel
//! [`ALL_PAGES`] grants everything. Roles missing from the table get the
//! empty set, so an unknown role still resolves, just to a menu with only
//! the universal items.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};
use validator::{Validate, ValidationError};

use crate::error::PermissionTableError;

/// Sentinel label granting unrestricted access.
pub const ALL_PAGES: &str = "All Pages";

/// Role identifier of the organization's own administrators.
pub const ADMIN_ROLE: &str = "admin";

static EMPTY: PermissionSet = PermissionSet::Labels(BTreeSet::new());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSet {
    Unrestricted,
    Labels(BTreeSet<String>),
}

impl PermissionSet {
    /// Collapses to [`PermissionSet::Unrestricted`] if the sentinel is present.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        if labels.contains(ALL_PAGES) {
            PermissionSet::Unrestricted
        } else {
            PermissionSet::Labels(labels)
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, PermissionSet::Unrestricted)
    }

    /// Exact match; the unrestricted set contains every label.
    pub fn contains(&self, label: &str) -> bool {
        match self {
            PermissionSet::Unrestricted => true,
            PermissionSet::Labels(labels) => labels.contains(label),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PermissionSet::Unrestricted => false,
            PermissionSet::Labels(labels) => labels.is_empty(),
        }
    }

    /// Labels as configured; the unrestricted set reports the sentinel.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            PermissionSet::Unrestricted => vec![ALL_PAGES],
            PermissionSet::Labels(labels) => labels.iter().map(String::as_str).collect(),
        }
    }
}

fn is_padded(value: &str) -> bool {
    value.trim().len() != value.len()
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if is_padded(role) {
        let mut err = ValidationError::new("role_whitespace");
        err.message = Some("role identifiers must not start or end with whitespace".into());
        return Err(err);
    }
    Ok(())
}

fn validate_labels(labels: &[String]) -> Result<(), ValidationError> {
    for label in labels {
        let len = label.chars().count();
        if len == 0 || len > 128 {
            let mut err = ValidationError::new("label_length");
            err.message = Some("permission labels must be 1-128 characters".into());
            return Err(err);
        }
        if is_padded(label) {
            let mut err = ValidationError::new("label_whitespace");
            err.message = Some("permission labels must not start or end with whitespace".into());
            return Err(err);
        }
    }
    Ok(())
}

/// One role entry of a permission file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RolePermissions {
    #[validate(length(min = 1, max = 64), custom(function = "validate_role"))]
    pub role: String,
    #[validate(custom(function = "validate_labels"))]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionTable {
    roles: BTreeMap<String, PermissionSet>,
}

impl PermissionTable {
    pub fn builtin() -> Self {
        const DAILY_ALL: &str = crate::catalog::ALL_DEPARTMENTS_TASKS;

        let entries: [(&str, &[&str]); 11] = [
            (ADMIN_ROLE, &[ALL_PAGES]),
            ("property_admin", &[ALL_PAGES]),
            ("facility_manager", &[ALL_PAGES]),
            (
                "fire_officer",
                &[
                    DAILY_ALL,
                    "Monthly Checklist",
                    "Facility or Technical team Patrolling Report",
                    "Fire and Safety",
                    "Work Permits",
                ],
            ),
            ("helpdesk", &["Helpdesk", DAILY_ALL, "Escalation Log"]),
            (
                "security_supervisor",
                &[
                    "Gate Management",
                    "Security Daily Checklist",
                    "Security Patrolling Report",
                    "Key Register",
                ],
            ),
            (
                "store_keeper",
                &[
                    "Inventory Management",
                    "Inward Material Register",
                    "Outward Material Register",
                ],
            ),
            (
                "technical_supervisor",
                &[
                    "Technical Daily Checklist",
                    "Monthly Maintenance Schedule",
                    "Facility or Technical team Patrolling Report",
                    "Inspection Checklists",
                    "Work Permits",
                ],
            ),
            (
                "housekeeping_supervisor",
                &["Housekeeping Daily Checklist", "Monthly Checklist"],
            ),
            ("procurement_officer", &["Vendor Management", "Inventory Reports"]),
            ("project_manager", &["Project Management", "Vendor Contracts"]),
        ];

        Self {
            roles: entries
                .into_iter()
                .map(|(role, labels)| {
                    (role.to_string(), PermissionSet::from_labels(labels.iter().copied()))
                })
                .collect(),
        }
    }

    /// Builds a table from validated entries, stored exactly as written.
    /// Later duplicates replace earlier ones.
    pub fn from_entries(entries: Vec<RolePermissions>) -> Result<Self, PermissionTableError> {
        let mut roles = BTreeMap::new();
        for entry in entries {
            entry
                .validate()
                .map_err(|source| PermissionTableError::Invalid {
                    role: entry.role.clone(),
                    source,
                })?;
            roles.insert(entry.role, PermissionSet::from_labels(entry.labels));
        }
        Ok(Self { roles })
    }

    /// Parses `{ "role": ["Label", ...], ... }`.
    pub fn from_json(json: &str) -> Result<Self, PermissionTableError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(role, labels)| RolePermissions { role, labels })
            .collect();
        Self::from_entries(entries)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PermissionTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        info!(path = %path.display(), roles = table.len(), "Loaded role permission table");
        Ok(table)
    }

    /// Permission set for `role`; unknown roles get the empty set.
    pub fn permissions_for(&self, role: &str) -> &PermissionSet {
        match self.roles.get(role) {
            Some(set) => set,
            None => {
                debug!(role, "Role not in permission table, using empty set");
                &EMPTY
            }
        }
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Role identifiers in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PermissionSet)> {
        self.roles.iter().map(|(role, set)| (role.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
