use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use facilityhub_config::{CorsConfig, JwtConfig, NavigationConfig};
use facilityhub_db::{PgDirectory, init_db_pool, run_migrations};
use facilityhub_nav::{Navigator, ProfileSource, PropertySource};

#[derive(Clone)]
pub struct AppState {
    pub navigator: Navigator,
    pub profiles: Arc<dyn ProfileSource>,
    pub properties: Arc<dyn PropertySource>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("roles", &self.navigator.table().len())
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Connects to PostgreSQL, applies migrations and loads configuration.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool().await?;
    run_migrations(&pool).await?;
    let directory = Arc::new(PgDirectory::new(pool));
    let navigation = NavigationConfig::from_env();
    let navigator = Navigator::load(navigation.permissions_file.as_deref())
        .context("Failed to build navigation")?;

    Ok(AppState {
        navigator,
        profiles: directory.clone(),
        properties: directory,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    })
}
