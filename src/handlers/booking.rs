use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::auth;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, MakeBookingRequest};
use crate::services;
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MakeBookingRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    let id = services::booking::create_booking(&db, &request)?;
    Ok(Json(serde_json::json!({ "id": id })))
}

// POST /api/bookings/track
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackBookingRequest {
    pub booking_id: i64,
    pub phone_number: String,
}

pub async fn track_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TrackBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let db = state.db.lock().unwrap();
    let booking = services::booking::track_booking(&db, body.booking_id, &body.phone_number)?;
    Ok(Json(booking))
}

// GET /api/bookings/history?phone=...
#[derive(Deserialize)]
pub struct HistoryQuery {
    pub phone: String,
}

pub async fn booking_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let db = state.db.lock().unwrap();
    let bookings = services::booking::bookings_by_phone(&db, &query.phone)?;
    Ok(Json(bookings))
}

// GET /api/admin/bookings
pub async fn get_all_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let bookings = services::booking::all_bookings(&ctx, &db)?;
    Ok(Json(bookings))
}

// GET /api/admin/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    let booking = services::booking::get_booking(&ctx, &db, id)?;
    Ok(Json(booking))
}

// POST /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let new_status = BookingStatus::parse(&body.status)
        .ok_or_else(|| AppError::Validation(format!("unknown booking status: {}", body.status)))?;

    let db = state.db.lock().unwrap();
    let ctx = auth::resolve_caller(&headers, &db, &state.config)?;
    services::booking::update_status(&ctx, &db, id, new_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
