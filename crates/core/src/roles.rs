//! Well-known role name constants.
//!
//! These must match the `roles` claim minted by the identity provider.

/// Base role: any signed-in user. Grants read access.
pub const ROLE_USER: &str = "user";

/// Elevated role: administrators. Implies [`ROLE_USER`].
pub const ROLE_ADMIN: &str = "admin";
