use common::{FetchError, Review};
use crate::api_client;

/// Get guest reviews for a property
pub async fn get_reviews(property_id: String) -> Result<Vec<Review>, FetchError> {
    log::trace!("Fetching reviews for property ID: {}", property_id);
    let endpoint = api_client::endpoint(&["properties", property_id.as_str(), "reviews"]);
    let failure = "Failed to fetch reviews for this property.";
    let result = api_client::get::<Vec<Review>>(&endpoint, failure).await;
    match &result {
        Ok(reviews) => {
            log::info!("Fetched {} reviews for property ID: {}", reviews.len(), property_id)
        }
        Err(e) => log::error!("Failed to fetch reviews for property {}: {}", property_id, e),
    }
    result
}
