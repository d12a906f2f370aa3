pub mod access;
pub mod booking;
pub mod invoice;
pub mod payment;
pub mod review;

use chrono::Utc;

/// Current instant as i64 nanoseconds since the Unix epoch, the time
/// representation used across the wire contract and the store.
pub fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}
