use common::{FetchError, PropertyDetail, PropertySummary};
use crate::api_client;

/// Get all listed properties
pub async fn get_properties() -> Result<Vec<PropertySummary>, FetchError> {
    log::trace!("Fetching all properties");
    let result =
        api_client::get::<Vec<PropertySummary>>("/properties", "Failed to fetch properties").await;
    match &result {
        Ok(properties) => log::info!("Fetched {} properties", properties.len()),
        Err(e) => log::error!("Failed to fetch properties: {}", e),
    }
    result
}

/// Get a specific property by ID
pub async fn get_property(property_id: String) -> Result<PropertyDetail, FetchError> {
    log::trace!("Fetching property with ID: {}", property_id);
    let endpoint = api_client::endpoint(&["properties", property_id.as_str()]);
    let failure = format!("Failed to fetch property with ID: {}", property_id);
    let result = api_client::get::<PropertyDetail>(&endpoint, &failure).await;
    match &result {
        Ok(property) => log::info!("Fetched property: {} (ID: {})", property.name, property.id),
        Err(e) => log::error!("Failed to fetch property {}: {}", property_id, e),
    }
    result
}
