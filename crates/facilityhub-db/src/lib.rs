//! # FacilityHub DB
//!
//! PostgreSQL pool setup and the Postgres-backed profile/property store.
//!
//! # Example
//!
//! ```ignore
//! use facilityhub_db::{PgDirectory, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool().await?;
//! run_migrations(&pool).await?;
//! let directory = PgDirectory::new(pool);
//! ```

mod directory;

use std::env;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

pub use directory::PgDirectory;
pub use sqlx::PgPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connects to `DATABASE_URL`.
///
/// Pool size comes from `DATABASE_MAX_CONNECTIONS` (default 10).
pub async fn init_db_pool() -> anyhow::Result<PgPool> {
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    info!(max_connections, "Database pool ready");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations applied");
    Ok(())
}
