use std::path::PathBuf;

use thiserror::Error;

/// Structural problems found while validating a menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("menu node has a blank label")]
    BlankLabel,
    #[error("menu group `{label}` has no children")]
    EmptyGroup { label: String },
    #[error("menu label `{label}` appears more than once")]
    DuplicateLabel { label: String },
    #[error("route `{route}` is used by more than one menu entry")]
    DuplicateRoute { route: String },
}

/// Failures loading a permission table from configuration.
#[derive(Debug, Error)]
pub enum PermissionTableError {
    #[error("failed to read permission table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse permission table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid permissions for role `{role}`: {source}")]
    Invalid {
        role: String,
        #[source]
        source: validator::ValidationErrors,
    },
}

/// Failures assembling a [`Navigator`](crate::Navigator) at startup.
#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("built-in menu catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
    #[error("failed to load role permissions from {path}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: PermissionTableError,
    },
}

/// Failures of the profile or property collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("{what} not found")]
    NotFound { what: &'static str },
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("storage error: {0}")]
    Storage(String),
}
