use axum::http::HeaderMap;
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::queries;
use crate::errors::AppError;
use crate::models::UserRole;

/// Who is making this request. Resolved once per request and passed
/// explicitly into service calls; there is no ambient session state.
#[derive(Debug, Clone)]
pub struct CallerContext {
    /// Opaque caller identity (the presented bearer token). None = guest.
    pub identity: Option<String>,
    pub role: UserRole,
}

impl CallerContext {
    pub fn guest() -> Self {
        Self {
            identity: None,
            role: UserRole::Guest,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Guests and authenticated non-admin users get the same denial.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }

    pub fn require_identity(&self) -> Result<&str, AppError> {
        self.identity.as_deref().ok_or(AppError::PermissionDenied)
    }
}

/// Resolves the caller from the Authorization header.
///
/// No header means guest. The configured admin token is always admin
/// (bootstrap rule); any other token is an authenticated identity whose
/// role comes from the store, defaulting to user.
pub fn resolve_caller(
    headers: &HeaderMap,
    conn: &Connection,
    config: &AppConfig,
) -> Result<CallerContext, AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token.is_empty() {
        return Ok(CallerContext::guest());
    }

    if token == config.admin_token {
        return Ok(CallerContext {
            identity: Some(token.to_string()),
            role: UserRole::Admin,
        });
    }

    let role = queries::get_role(conn, token)?.unwrap_or(UserRole::User);
    Ok(CallerContext {
        identity: Some(token.to_string()),
        role,
    })
}
