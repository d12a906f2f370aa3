use rusqlite::Connection;

use crate::auth::CallerContext;
use crate::db::queries;
use crate::errors::AppError;

// Payment instructions are free text shown on the payments page (bank
// details, UPI ids and the like). No real money movement happens here.

pub fn list_instructions(conn: &Connection) -> Result<Vec<(i64, String)>, AppError> {
    Ok(queries::get_all_payment_instructions(conn)?)
}

pub fn add_instruction(
    ctx: &CallerContext,
    conn: &Connection,
    instruction: &str,
) -> Result<i64, AppError> {
    ctx.require_admin()?;
    if instruction.trim().is_empty() {
        return Err(AppError::Validation("instruction must not be empty".to_string()));
    }
    Ok(queries::insert_payment_instruction(conn, instruction)?)
}

pub fn update_instruction(
    ctx: &CallerContext,
    conn: &Connection,
    id: i64,
    instruction: &str,
) -> Result<(), AppError> {
    ctx.require_admin()?;
    if instruction.trim().is_empty() {
        return Err(AppError::Validation("instruction must not be empty".to_string()));
    }
    if !queries::update_payment_instruction(conn, id, instruction)? {
        return Err(AppError::NotFound(format!("payment instruction {id}")));
    }
    Ok(())
}

pub fn delete_instruction(ctx: &CallerContext, conn: &Connection, id: i64) -> Result<(), AppError> {
    ctx.require_admin()?;
    if !queries::delete_payment_instruction(conn, id)? {
        return Err(AppError::NotFound(format!("payment instruction {id}")));
    }
    Ok(())
}

/// Records the payment method the customer settled on for an existing
/// booking.
pub fn process_payment(
    conn: &Connection,
    booking_id: i64,
    payment_method: &str,
) -> Result<(), AppError> {
    if payment_method.trim().is_empty() {
        return Err(AppError::Validation("paymentMethod must not be empty".to_string()));
    }
    if !queries::update_booking_payment_method(conn, booking_id, payment_method)? {
        return Err(AppError::NotFound(format!("booking {booking_id}")));
    }
    Ok(())
}
