use anyhow::Result;
use common::{FetchState, Review};
use tracing::{debug, info, trace};

use super::settled_output;
use crate::api_client::RentalApi;
use crate::render::{LOADING_REVIEWS, review_list};
use crate::resource::Resource;

/// Fetches the reviews for `property_id`; an empty id fetches nothing.
pub(super) async fn fetch_reviews(api: &RentalApi, property_id: &str) -> FetchState<Vec<Review>> {
    let mut reviews = Resource::new(|id: String| {
        let api = api.clone();
        async move { api.get_reviews(&id).await }
    });

    let key = (!property_id.is_empty()).then(|| property_id.to_string());
    reviews.observe(key);
    reviews.settled().await.clone()
}

pub async fn show_reviews(api: &RentalApi, property_id: &str) -> Result<String> {
    trace!("Entering show_reviews command");
    debug!("Property ID: {}", property_id);

    let state = fetch_reviews(api, property_id).await;
    if let Some(reviews) = state.data() {
        info!("Fetched {} reviews for property {}", reviews.len(), property_id);
    }
    settled_output(&state, LOADING_REVIEWS, |reviews| review_list(reviews))
}
