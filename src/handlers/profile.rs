use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::auth;
use crate::errors::AppError;
use crate::models::{UserProfile, UserRole};
use crate::services;
use crate::state::AppState;

// GET /api/me/role
pub async fn get_caller_role(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    Ok(Json(serde_json::json!({ "role": ctx.role.as_str() })))
}

// GET /api/me/is-admin
pub async fn is_caller_admin(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    Ok(Json(serde_json::json!({ "isAdmin": ctx.is_admin() })))
}

// GET /api/me/profile
pub async fn get_caller_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Option<UserProfile>>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let profile = services::access::get_caller_profile(&ctx, &db)?;
    Ok(Json(profile))
}

// POST /api/me/profile
pub async fn save_caller_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(profile): Json<UserProfile>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    services::access::save_caller_profile(&ctx, &db, &profile)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// POST /api/admin/roles
#[derive(Deserialize)]
pub struct AssignRoleRequest {
    pub identity: String,
    pub role: String,
}

pub async fn assign_role(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<AssignRoleRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let role = UserRole::parse(&body.role)
        .ok_or_else(|| AppError::Validation(format!("unknown role: {}", body.role)))?;

    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    services::access::assign_role(&ctx, &db, &body.identity, role)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// GET /api/admin/profiles/:identity
pub async fn get_user_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(identity): Path<String>,
) -> Result<Json<Option<UserProfile>>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let profile = services::access::get_user_profile(&ctx, &db, &identity)?;
    Ok(Json(profile))
}
