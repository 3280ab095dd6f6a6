use anyhow::Result;
use tracing::{debug, info, trace, warn};

use super::reviews::fetch_reviews;
use super::settled_output;
use crate::api_client::RentalApi;
use crate::render::{self, LOADING_PROPERTY, LOADING_REVIEWS, property_detail, review_list};
use crate::resource::Resource;

/// Shows a property, then the reviews keyed by the loaded property's id.
pub async fn show_property(api: &RentalApi, id: &str) -> Result<String> {
    trace!("Entering show_property command");
    debug!("Property ID: {}", id);

    let mut property = Resource::new(|id: String| {
        let api = api.clone();
        async move { api.get_property(&id).await }
    });

    let key = (!id.is_empty()).then(|| id.to_string());
    if key.is_none() {
        warn!("No property id given, nothing to fetch");
    }
    property.observe(key);
    let state = property.settled().await;

    let Some(detail) = state.data() else {
        return settled_output(state, LOADING_PROPERTY, |detail| property_detail(detail));
    };
    info!("Fetched property {}", detail.id);

    let mut output = property_detail(detail);
    let reviews = fetch_reviews(api, &detail.id).await;
    output.push('\n');
    // A review failure is shown inline rather than failing the whole page.
    output.push_str(&render::fetch_state(&reviews, LOADING_REVIEWS, |reviews| {
        review_list(reviews)
    }));
    Ok(output)
}
