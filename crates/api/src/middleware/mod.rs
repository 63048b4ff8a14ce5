//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireUser`] -- Requires the base `user` role (or `admin`).
//! - [`rbac::RequireAdmin`] -- Requires the elevated `admin` role.
//!
//! Every rejection is 403 Forbidden, including a missing or invalid token.

pub mod auth;
pub mod rbac;
