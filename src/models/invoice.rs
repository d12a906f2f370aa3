use serde::{Deserialize, Serialize};

/// A billing document tied to one booking.
///
/// `amount` is a decimal string fixed at creation time and is the source
/// of truth for the headline total. `description` is an opaque payload
/// (see `invoice_math::InvoiceDetails`) that consumers decode themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub booking_id: i64,
    pub customer_name: String,
    pub amount: String,
    pub description: String,
    pub status: InvoiceStatus,
    pub created_at: i64,
    pub payment_date: Option<i64>,
    pub public_access_code: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            "cancelled" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }
}
