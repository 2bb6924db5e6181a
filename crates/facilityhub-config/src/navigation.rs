use std::env;
use std::path::PathBuf;

/// Where the role permission table comes from.
///
/// When `ROLE_PERMISSIONS_FILE` is unset the table compiled into
/// `facilityhub-nav` is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationConfig {
    pub permissions_file: Option<PathBuf>,
}

impl NavigationConfig {
    pub fn from_env() -> Self {
        Self {
            permissions_file: env::var("ROLE_PERMISSIONS_FILE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}
