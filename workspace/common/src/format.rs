//! Display helpers shared by the web and terminal frontends.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// Nightly price in US dollars, e.g. `$1,250.00 / night`.
pub fn price_per_night(price: Decimal) -> String {
    // Money keeps the decimal's own scale; always show cents.
    let mut cents = price;
    cents.rescale(2);
    format!("{} / night", Money::from_decimal(cents, iso::USD))
}

/// Five-star strip for a review rating; out-of-range ratings are clamped.
pub fn star_rating(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING as i32) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Accessible description of a rating.
pub fn rating_label(rating: i32) -> String {
    format!(
        "Rating: {} out of {} stars",
        rating.clamp(0, MAX_RATING as i32),
        MAX_RATING
    )
}
