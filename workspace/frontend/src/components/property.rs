pub mod property_card;
pub mod property_detail;
pub mod review_section;
