//! # FacilityHub Models
//!
//! Records served by the profile and property services and consumed by the
//! navigation resolver.
//!
//! - [`ids`]: strongly-typed identifiers
//! - [`profiles`]: user profiles and account tiers
//! - [`properties`]: properties (sites) and their branding
//!
//! # Example
//!
//! ```ignore
//! use facilityhub_models::{AccountTier, UserProfile};
//!
//! let tier: AccountTier = "cadmin".parse()?;
//! assert_eq!(tier.as_str(), "cadmin");
//! ```

pub mod ids;
pub mod profiles;
pub mod properties;

pub use ids::{PropertyId, UserId};
pub use profiles::{AccountTier, ProfileRow, UnknownAccountTier, UserProfile};
pub use properties::Property;
