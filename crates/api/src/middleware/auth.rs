//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use coursedesk_core::error::CoreError;
use coursedesk_core::roles::{ROLE_ADMIN, ROLE_USER};

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Caller extracted from a JWT Bearer token in the `Authorization` header.
///
/// Anonymous callers are rejected with 403, the same status as a caller who
/// lacks a role.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The caller's login (from `claims.sub`).
    pub subject: String,
    /// Role names granted to the caller.
    pub roles: Vec<String>,
}

impl AuthUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Holds the base role. The admin role implies it.
    pub fn is_user(&self) -> bool {
        self.has_role(ROLE_USER) || self.is_admin()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden("Authentication required".into()))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::Core(CoreError::Forbidden("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            subject: claims.sub,
            roles: claims.roles,
        })
    }
}
