use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Review;
use crate::services;
use crate::state::AppState;

// GET /api/reviews
pub async fn get_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Review>>, AppError> {
    let db = state.db.lock().unwrap();
    let reviews = services::review::all_reviews(&db)?;
    Ok(Json(reviews))
}

// POST /api/reviews
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewRequest {
    pub author: String,
    pub review_text: String,
}

pub async fn submit_review(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SubmitReviewRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let db = state.db.lock().unwrap();
    services::review::submit_review(&db, &body.author, &body.review_text)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
