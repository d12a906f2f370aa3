pub mod booking;
pub mod health;
pub mod invoice;
pub mod payment;
pub mod profile;
pub mod review;
