//! Platform-neutral pieces shared by the web frontend and the terminal client:
//! the keyed fetch lifecycle, the rental API's transport types, booking
//! validation and display formatting.

pub mod booking;
pub mod error;
pub mod fetch;
pub mod format;

pub use booking::{BookingField, BookingRequest, BookingValidator, RequiredFields, ValidationRule};
pub use error::{BookingError, FALLBACK_ERROR_MESSAGE, FetchError};
pub use fetch::{Epoch, FetchController, FetchState, Settlement, Ticket};

pub use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shown after the booking endpoint accepts a request.
pub const BOOKING_CONFIRMED_MESSAGE: &str =
    "Booking confirmed successfully! A confirmation has been sent to your email.";

// ===================== Properties =====================

/// Listing card returned by `GET /properties`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: String,
}

/// Full property returned by `GET /properties/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image_url: String,
    /// Reviews embedded by the detail endpoint; the review section fetches its own.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

// ===================== Reviews =====================

/// Guest review returned by `GET /properties/{id}/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub comment: String,
    /// 0 to 5 stars
    pub rating: i32,
}

impl Review {
    pub fn stars(&self) -> String {
        format::star_rating(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_summary_reads_camel_case_and_numeric_price() {
        let json = r#"{
            "id": "p1",
            "name": "Cabin",
            "location": "Lake Tahoe, CA",
            "price": 245.5,
            "imageUrl": "https://img.example.com/p1.jpg"
        }"#;
        let summary: PropertySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, "p1");
        assert_eq!(summary.price, Decimal::new(2455, 1));
        assert_eq!(summary.image_url, "https://img.example.com/p1.jpg");
    }

    #[test]
    fn property_detail_defaults_missing_collections() {
        let json = r#"{
            "id": "p2",
            "name": "Villa",
            "location": "Amalfi",
            "price": 900,
            "description": "Sea view",
            "imageUrl": "villa.jpg"
        }"#;
        let detail: PropertyDetail = serde_json::from_str(json).unwrap();
        assert!(detail.amenities.is_empty());
        assert!(detail.reviews.is_empty());
        assert_eq!(detail.price, Decimal::new(900, 0));
    }

    #[test]
    fn property_detail_with_embedded_reviews() {
        let json = r#"{
            "id": "p3",
            "name": "Loft",
            "location": "Berlin",
            "price": 120,
            "description": "Central",
            "amenities": ["Wifi", "Kitchen"],
            "imageUrl": "loft.jpg",
            "reviews": [{"id": "r1", "author": "Sam", "comment": "Great", "rating": 4}]
        }"#;
        let detail: PropertyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.amenities, vec!["Wifi", "Kitchen"]);
        assert_eq!(detail.reviews[0].stars(), "★★★★☆");
    }

    #[test]
    fn price_is_written_back_as_a_number() {
        let summary = PropertySummary {
            id: "p1".into(),
            name: "Cabin".into(),
            location: "Tahoe".into(),
            price: Decimal::new(150, 0),
            image_url: "cabin.jpg".into(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["imageUrl"], "cabin.jpg");
    }
}
