use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use rusqlite::Connection;

use crate::auth::CallerContext;
use crate::db::queries;
use crate::errors::AppError;
use crate::invoice_math::InvoiceDetails;
use crate::models::Invoice;
use crate::services::now_nanos;

/// 128 bits of randomness, URL-safe so the code can ride in a shareable
/// link. Generated once at invoice creation and immutable thereafter.
fn generate_access_code() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Creates an invoice against an existing booking, copying the customer
/// name at creation time. Returns the new invoice id together with the
/// public access code for the shareable link.
pub fn create_invoice(
    ctx: &CallerContext,
    conn: &Connection,
    booking_id: i64,
    amount: &str,
    description: &str,
) -> Result<(i64, String), AppError> {
    ctx.require_admin()?;
    validate_invoice(amount, description)?;

    let booking = queries::get_booking(conn, booking_id)?
        .ok_or_else(|| AppError::NotFound(format!("booking {booking_id}")))?;

    let access_code = generate_access_code();
    let id = queries::insert_invoice(
        conn,
        booking_id,
        &booking.customer_name,
        amount,
        description,
        now_nanos(),
        &access_code,
    )?;

    tracing::info!(invoice_id = id, booking_id, "invoice created");
    Ok((id, access_code))
}

fn validate_invoice(amount: &str, description: &str) -> Result<(), AppError> {
    if amount.trim().is_empty() {
        return Err(AppError::Validation("amount must not be empty".to_string()));
    }
    let parsed: f64 = amount
        .parse()
        .map_err(|_| AppError::Validation(format!("amount is not a decimal: {amount}")))?;
    if parsed < 0.0 {
        return Err(AppError::Validation("amount must not be negative".to_string()));
    }

    // The description payload is opaque by contract; only a payload that
    // does decode as the structured document gets its contents checked.
    if let Ok(details) = serde_json::from_str::<InvoiceDetails>(description) {
        for item in &details.line_items {
            if item.description.trim().is_empty() {
                return Err(AppError::Validation(
                    "line item description must not be empty".to_string(),
                ));
            }
            if item.quantity <= 0.0 {
                return Err(AppError::Validation(
                    "line item quantity must be positive".to_string(),
                ));
            }
            if item.unit_price < 0.0 {
                return Err(AppError::Validation(
                    "line item unit price must not be negative".to_string(),
                ));
            }
        }
        for (name, pct) in [
            ("discountPercent", details.discount_percent),
            ("taxPercent", details.tax_percent),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                return Err(AppError::Validation(format!("{name} must be within 0..=100")));
            }
        }
    }

    Ok(())
}

pub fn get_invoice(ctx: &CallerContext, conn: &Connection, id: i64) -> Result<Invoice, AppError> {
    ctx.require_admin()?;
    queries::get_invoice(conn, id)?.ok_or_else(|| AppError::NotFound(format!("invoice {id}")))
}

/// Capability-token lookup: possession of the access code is the sole
/// authorization factor. No expiry, rate limiting, or revocation.
pub fn get_invoice_public(
    conn: &Connection,
    id: i64,
    access_code: &str,
) -> Result<Invoice, AppError> {
    let invoice =
        queries::get_invoice(conn, id)?.ok_or_else(|| AppError::NotFound(format!("invoice {id}")))?;

    if invoice.public_access_code != access_code {
        return Err(AppError::AccessDenied("invalid access code".to_string()));
    }

    Ok(invoice)
}

/// Idempotent: marking an already-paid invoice keeps its original
/// payment date.
pub fn mark_paid(ctx: &CallerContext, conn: &Connection, id: i64) -> Result<(), AppError> {
    ctx.require_admin()?;

    if !queries::mark_invoice_paid(conn, id, now_nanos())? {
        return Err(AppError::NotFound(format!("invoice {id}")));
    }

    tracing::info!(invoice_id = id, "invoice marked paid");
    Ok(())
}

pub fn all_invoices(ctx: &CallerContext, conn: &Connection) -> Result<Vec<Invoice>, AppError> {
    ctx.require_admin()?;
    Ok(queries::get_all_invoices(conn)?)
}
