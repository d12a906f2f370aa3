use rusqlite::Connection;

use crate::auth::CallerContext;
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{UserProfile, UserRole};

/// Promotes or demotes another caller. Admin only; the bootstrap admin
/// token stays admin regardless of what is recorded here.
pub fn assign_role(
    ctx: &CallerContext,
    conn: &Connection,
    identity: &str,
    role: UserRole,
) -> Result<(), AppError> {
    ctx.require_admin()?;
    if identity.trim().is_empty() {
        return Err(AppError::Validation("identity must not be empty".to_string()));
    }
    queries::set_role(conn, identity, role)?;
    tracing::info!(role = role.as_str(), "role assigned");
    Ok(())
}

pub fn get_caller_profile(
    ctx: &CallerContext,
    conn: &Connection,
) -> Result<Option<UserProfile>, AppError> {
    match ctx.identity.as_deref() {
        Some(identity) => Ok(queries::get_profile(conn, identity)?),
        None => Ok(None),
    }
}

/// Owner-only upsert: a caller can only write the profile attached to
/// its own identity.
pub fn save_caller_profile(
    ctx: &CallerContext,
    conn: &Connection,
    profile: &UserProfile,
) -> Result<(), AppError> {
    let identity = ctx.require_identity()?;
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    queries::save_profile(conn, identity, profile)?;
    Ok(())
}

pub fn get_user_profile(
    ctx: &CallerContext,
    conn: &Connection,
    identity: &str,
) -> Result<Option<UserProfile>, AppError> {
    ctx.require_admin()?;
    Ok(queries::get_profile(conn, identity)?)
}
