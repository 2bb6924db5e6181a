//! Demo data for local development.
//!
//! Properties and profiles are written through [`PgDirectory`] so the seeded
//! rows go through the same upserts the server reads back.

pub mod models;
pub mod properties;
pub mod users;

use std::time::Instant;

use anyhow::Context;
use facilityhub_db::PgDirectory;
use facilityhub_nav::PermissionTable;
use tracing::info;

pub use models::{SeedConfig, UsersPerProperty};

/// Counts of what [`seed_all`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub properties: usize,
    pub users: usize,
}

pub async fn seed_all(
    directory: &PgDirectory,
    table: &PermissionTable,
    config: &SeedConfig,
) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} properties and {} users...",
        config.num_properties,
        config.total_users()
    );

    let properties = properties::generate_properties(config.num_properties, config.with_logos);
    for property in &properties {
        directory
            .upsert_property(property)
            .await
            .with_context(|| format!("Failed to insert property {}", property.name))?;
    }
    println!("   ✓ Inserted {} properties", properties.len());

    let mut profiles = users::generate_org_admins(config.org_admins);
    profiles.extend(users::generate_property_users(
        &properties,
        &config.users_per_property,
        table,
    ));
    for profile in &profiles {
        directory
            .upsert_profile(profile)
            .await
            .with_context(|| format!("Failed to insert user {}", profile.email))?;
    }
    println!("   ✓ Inserted {} users", profiles.len());

    let summary = SeedSummary {
        properties: properties.len(),
        users: profiles.len(),
    };
    info!(?summary, elapsed = ?start_time.elapsed(), "Seeding complete");
    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());

    Ok(summary)
}

/// Removes every user and property.
pub async fn clear_all(directory: &PgDirectory) -> anyhow::Result<()> {
    let start_time = Instant::now();
    println!("🗑️  Clearing users and properties...");
    directory
        .clear()
        .await
        .context("Failed to clear seeded data")?;
    println!("   ✓ Cleared in {:?}", start_time.elapsed());
    Ok(())
}
