use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::auth;
use crate::errors::AppError;
use crate::models::Invoice;
use crate::services;
use crate::state::AppState;

// POST /api/admin/invoices
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub booking_id: i64,
    pub amount: String,
    pub description: String,
}

pub async fn create_invoice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<CreateInvoiceRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let (id, access_code) =
        services::invoice::create_invoice(&ctx, &db, body.booking_id, &body.amount, &body.description)?;
    Ok(Json(serde_json::json!({ "id": id, "accessCode": access_code })))
}

// GET /api/admin/invoices
pub async fn get_all_invoices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Invoice>>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let invoices = services::invoice::all_invoices(&ctx, &db)?;
    Ok(Json(invoices))
}

// GET /api/admin/invoices/:id
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Invoice>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let invoice = services::invoice::get_invoice(&ctx, &db, id)?;
    Ok(Json(invoice))
}

// POST /api/admin/invoices/:id/paid
pub async fn mark_invoice_paid(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    services::invoice::mark_paid(&ctx, &db, id)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

// GET /api/invoices/:id?code=...
#[derive(Deserialize)]
pub struct PublicInvoiceQuery {
    pub code: String,
}

pub async fn get_invoice_public(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<PublicInvoiceQuery>,
) -> Result<Json<Invoice>, AppError> {
    let db = state.db.lock().unwrap();
    let invoice = services::invoice::get_invoice_public(&db, id, &query.code)?;
    Ok(Json(invoice))
}
