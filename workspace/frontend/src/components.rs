pub mod layout;
pub mod property;
