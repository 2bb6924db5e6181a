//! # FacilityHub CLI
//!
//! Library side of the `facilityhub-cli` binary: menu outlines for the
//! terminal and demo data seeding.
//!
//! ## Usage
//!
//! ```ignore
//! use facilityhub_cli::seeder::{SeedConfig, seed_all};
//!
//! let config = SeedConfig::new(3); // 3 properties with default users
//! seed_all(&directory, &table, &config).await?;
//! ```

pub mod outline;
pub mod seeder;
