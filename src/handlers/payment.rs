use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::errors::AppError;
use crate::services;
use crate::state::AppState;

#[derive(Serialize)]
pub struct InstructionResponse {
    pub id: i64,
    pub instruction: String,
}

// GET /api/payments/instructions
pub async fn get_instructions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<InstructionResponse>>, AppError> {
    let db = state.db.lock().unwrap();
    let instructions = services::payment::list_instructions(&db)?;
    Ok(Json(
        instructions
            .into_iter()
            .map(|(id, instruction)| InstructionResponse { id, instruction })
            .collect(),
    ))
}

// POST /api/admin/instructions
#[derive(Deserialize)]
pub struct InstructionRequest {
    pub instruction: String,
}

pub async fn add_instruction(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<InstructionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let id = services::payment::add_instruction(&ctx, &db, &body.instruction)?;
    Ok(Json(serde_json::json!({ "id": id })))
}

// POST /api/admin/instructions/:id
pub async fn update_instruction(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<InstructionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    services::payment::update_instruction(&ctx, &db, id, &body.instruction)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// POST /api/admin/instructions/:id/delete
pub async fn delete_instruction(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    services::payment::delete_instruction(&ctx, &db, id)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// POST /api/payments/process
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    pub booking_id: i64,
    pub payment_method: String,
}

pub async fn process_payment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ProcessPaymentRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    services::payment::process_payment(&db, body.booking_id, &body.payment_method)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
