pub mod booking;
pub mod home;
pub mod property_detail;
