use common::format::{price_per_night, rating_label};
use common::{FetchState, PropertyDetail, PropertySummary, Review};

pub const LOADING_PROPERTIES: &str = "Loading properties...";
pub const LOADING_PROPERTY: &str = "Loading property...";
pub const LOADING_REVIEWS: &str = "Loading reviews...";
pub const NO_PROPERTIES: &str = "No properties available.";
pub const NO_REVIEWS: &str = "There are no reviews for this property yet.";

/// Text for any fetch state; `loaded` renders the data.
pub fn fetch_state<T>(
    state: &FetchState<T>,
    loading_text: &str,
    loaded: impl FnOnce(&T) -> String,
) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => loading_text.to_string(),
        FetchState::Failed(message) => format!("Error: {}", message),
        FetchState::Loaded(data) => loaded(data),
    }
}

pub fn property_list(properties: &[PropertySummary]) -> String {
    if properties.is_empty() {
        return NO_PROPERTIES.to_string();
    }

    properties
        .iter()
        .map(|property| {
            format!(
                "{} [{}]\n  {}\n  {}\n",
                property.name,
                property.id,
                property.location,
                price_per_night(property.price)
            )
        })
        .collect()
}

pub fn property_detail(property: &PropertyDetail) -> String {
    let mut out = format!(
        "{}\n{}\n{}\n\n{}\n",
        property.name,
        property.location,
        price_per_night(property.price),
        property.description
    );

    if !property.amenities.is_empty() {
        out.push_str("\nAmenities\n");
        for amenity in &property.amenities {
            out.push_str(&format!("  - {}\n", amenity));
        }
    }
    out
}

pub fn review_list(reviews: &[Review]) -> String {
    let mut out = String::from("Guest Reviews\n");
    if reviews.is_empty() {
        out.push_str(NO_REVIEWS);
        out.push('\n');
        return out;
    }

    for review in reviews {
        out.push_str(&format!(
            "{} {} ({})\n  {}\n",
            review.stars(),
            review.author,
            rating_label(review.rating),
            review.comment
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Decimal;

    fn cabin() -> PropertySummary {
        PropertySummary {
            id: "p1".to_string(),
            name: "Cabin".to_string(),
            location: "Lake Tahoe, CA".to_string(),
            price: Decimal::new(1250, 0),
            image_url: "cabin.jpg".to_string(),
        }
    }

    #[test]
    fn states_render_their_placeholders() {
        let idle: FetchState<u8> = FetchState::Idle;
        assert_eq!(fetch_state(&idle, LOADING_PROPERTIES, |_| unreachable!()), "");

        let loading: FetchState<u8> = FetchState::Loading;
        assert_eq!(
            fetch_state(&loading, LOADING_PROPERTIES, |_| unreachable!()),
            "Loading properties..."
        );

        let failed: FetchState<u8> = FetchState::Failed("Failed to fetch properties".to_string());
        assert_eq!(
            fetch_state(&failed, LOADING_PROPERTIES, |_| unreachable!()),
            "Error: Failed to fetch properties"
        );

        let loaded = FetchState::Loaded(7u8);
        assert_eq!(fetch_state(&loaded, LOADING_PROPERTIES, |n| n.to_string()), "7");
    }

    #[test]
    fn listing_shows_formatted_price() {
        let out = property_list(&[cabin()]);
        assert_eq!(out, "Cabin [p1]\n  Lake Tahoe, CA\n  $1,250.00 / night\n");
    }

    #[test]
    fn empty_listing_and_reviews_have_messages() {
        assert_eq!(property_list(&[]), NO_PROPERTIES);
        assert!(review_list(&[]).contains(NO_REVIEWS));
    }

    #[test]
    fn reviews_show_stars_and_author() {
        let reviews = vec![Review {
            id: "r1".to_string(),
            author: "Sam".to_string(),
            comment: "Lovely stay".to_string(),
            rating: 4,
        }];
        let out = review_list(&reviews);
        assert!(out.starts_with("Guest Reviews\n"));
        assert!(out.contains("★★★★☆ Sam"));
        assert!(out.contains("Lovely stay"));
    }

    #[test]
    fn detail_lists_amenities() {
        let detail = PropertyDetail {
            id: "p1".to_string(),
            name: "Cabin".to_string(),
            location: "Lake Tahoe, CA".to_string(),
            price: Decimal::new(245, 0),
            description: "Quiet lakeside cabin".to_string(),
            amenities: vec!["Wifi".to_string(), "Fireplace".to_string()],
            image_url: "cabin.jpg".to_string(),
            reviews: Vec::new(),
        };
        let out = property_detail(&detail);
        assert!(out.contains("Quiet lakeside cabin"));
        assert!(out.contains("  - Fireplace"));
        assert!(out.contains("$245.00 / night"));
    }
}
