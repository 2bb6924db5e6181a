//! # FacilityHub Core
//!
//! Foundational types shared by every FacilityHub crate:
//!
//! - [`errors`]: the HTTP-facing [`AppError`] type
//! - [`serde`]: lenient deserializers for values coming from the web front end
//!
//! # Example
//!
//! ```ignore
//! use facilityhub_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Profile not found"));
//! ```

pub mod errors;
pub mod serde;

pub use errors::AppError;
