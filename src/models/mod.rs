pub mod booking;
pub mod invoice;
pub mod review;
pub mod user;

pub use booking::{Booking, BookingStatus, MakeBookingRequest};
pub use invoice::{Invoice, InvoiceStatus};
pub use review::Review;
pub use user::{UserProfile, UserRole};
