//! # FacilityHub Auth
//!
//! Bearer token handling. Tokens are issued by the identity provider (or by
//! `facilityhub-cli issue-token` during development) and only identify the
//! caller: role, account tier and property assignment are looked up from the
//! profile service on every navigation request.
//!
//! - [`claims`]: JWT claim structure
//! - [`jwt`]: token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use facilityhub_auth::{create_access_token, verify_token};
//! use facilityhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "officer@site.test", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
