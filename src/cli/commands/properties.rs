use anyhow::Result;
use tracing::{debug, info, trace};

use super::settled_output;
use crate::api_client::RentalApi;
use crate::render::{LOADING_PROPERTIES, property_list};
use crate::resource::Resource;

pub async fn list_properties(api: &RentalApi) -> Result<String> {
    trace!("Entering list_properties command");
    debug!("API base URL: {}", api.base_url());

    let mut listing = Resource::new(|()| {
        let api = api.clone();
        async move { api.list_properties().await }
    });

    listing.observe(Some(()));
    listing.settled().await;
    debug!("Listing settled after {} fetch(es)", listing.calls());
    let state = listing.state();

    if let Some(properties) = state.data() {
        info!("Fetched {} properties", properties.len());
    }
    settled_output(state, LOADING_PROPERTIES, |properties| property_list(properties))
}
