use rusqlite::Connection;

use crate::auth::CallerContext;
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, MakeBookingRequest};
use crate::services::now_nanos;

/// Creates a booking with status pending and a fresh monotonic id.
/// Public: anyone may book a repair. Only presence of the required
/// fields is validated.
pub fn create_booking(conn: &Connection, request: &MakeBookingRequest) -> Result<i64, AppError> {
    validate_request(request)?;

    let id = queries::insert_booking(
        conn,
        &request.customer_name,
        &request.phone_number,
        &request.device_model,
        &request.issue_description,
        request.photo_notes.as_deref(),
        &request.payment_method,
        request.preferred_date_time,
        now_nanos(),
    )?;

    tracing::info!(booking_id = id, "booking created");
    Ok(id)
}

fn validate_request(request: &MakeBookingRequest) -> Result<(), AppError> {
    let required = [
        ("customerName", &request.customer_name),
        ("phoneNumber", &request.phone_number),
        ("deviceModel", &request.device_model),
        ("issueDescription", &request.issue_description),
        ("paymentMethod", &request.payment_method),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(())
}

pub fn get_booking(ctx: &CallerContext, conn: &Connection, id: i64) -> Result<Booking, AppError> {
    ctx.require_admin()?;
    queries::get_booking(conn, id)?.ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

/// Public tracking path: the stored phone number is the credential and
/// must match exactly, case-sensitive, no normalization.
pub fn track_booking(conn: &Connection, id: i64, phone_number: &str) -> Result<Booking, AppError> {
    let booking =
        queries::get_booking(conn, id)?.ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    if booking.phone_number != phone_number {
        return Err(AppError::AccessDenied(
            "phone number does not match booking".to_string(),
        ));
    }

    Ok(booking)
}

/// Previous-bookings history for the tracking flow. Scoped to an exact
/// phone match; deliberately not an admin-wide enumeration primitive.
pub fn bookings_by_phone(conn: &Connection, phone_number: &str) -> Result<Vec<Booking>, AppError> {
    if phone_number.trim().is_empty() {
        return Err(AppError::Validation("phone must not be empty".to_string()));
    }
    Ok(queries::get_bookings_by_phone(conn, phone_number)?)
}

pub fn all_bookings(ctx: &CallerContext, conn: &Connection) -> Result<Vec<Booking>, AppError> {
    ctx.require_admin()?;
    Ok(queries::get_all_bookings(conn)?)
}

/// Unconditional status transition. The admin has full override power:
/// any status is reachable from any other, including completed back to
/// pending.
pub fn update_status(
    ctx: &CallerContext,
    conn: &Connection,
    id: i64,
    new_status: BookingStatus,
) -> Result<(), AppError> {
    ctx.require_admin()?;

    if !queries::update_booking_status(conn, id, new_status)? {
        return Err(AppError::NotFound(format!("booking {id}")));
    }

    tracing::info!(booking_id = id, status = new_status.as_str(), "booking status updated");
    Ok(())
}
