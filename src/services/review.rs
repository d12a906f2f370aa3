use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::Review;
use crate::services::now_nanos;

/// Appends a review. The board is append-only; entries are never updated
/// or deleted.
pub fn submit_review(conn: &Connection, author: &str, review_text: &str) -> Result<(), AppError> {
    if author.trim().is_empty() {
        return Err(AppError::Validation("author must not be empty".to_string()));
    }
    if review_text.trim().is_empty() {
        return Err(AppError::Validation("reviewText must not be empty".to_string()));
    }

    queries::insert_review(conn, author, review_text, now_nanos())?;
    Ok(())
}

pub fn all_reviews(conn: &Connection) -> Result<Vec<Review>, AppError> {
    Ok(queries::get_all_reviews(conn)?)
}
