use serde::{Deserialize, Serialize};

/// A customer's repair request. Instants are i64 nanoseconds since the
/// Unix epoch, matching the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub phone_number: String,
    pub device_model: String,
    pub issue_description: String,
    pub photo_notes: Option<String>,
    pub payment_method: String,
    pub preferred_date_time: i64,
    pub timestamp: i64,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeBookingRequest {
    pub customer_name: String,
    pub phone_number: String,
    pub device_model: String,
    pub issue_description: String,
    pub photo_notes: Option<String>,
    pub payment_method: String,
    pub preferred_date_time: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}
