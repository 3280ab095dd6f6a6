use anyhow::{Context, Result};
use common::{BookingError, BookingRequest, FetchError, PropertyDetail, PropertySummary, Review};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace};
use url::Url;

use crate::config::ClientConfig;

/// HTTP collaborator for the rental API.
#[derive(Debug, Clone)]
pub struct RentalApi {
    client: Client,
    base_url: Url,
}

impl RentalApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", config.api_base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry paths: {}", config.api_base_url);
        }

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        debug!("Rental API client targeting {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::network(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn list_properties(&self) -> Result<Vec<PropertySummary>, FetchError> {
        let url = self.endpoint(&["properties"])?;
        self.get(url, "Failed to fetch properties").await
    }

    pub async fn get_property(&self, id: &str) -> Result<PropertyDetail, FetchError> {
        let url = self.endpoint(&["properties", id])?;
        self.get(url, &format!("Failed to fetch property with ID: {}", id))
            .await
    }

    pub async fn get_reviews(&self, property_id: &str) -> Result<Vec<Review>, FetchError> {
        let url = self.endpoint(&["properties", property_id, "reviews"])?;
        self.get(url, "Failed to fetch reviews for this property.")
            .await
    }

    /// Submits a booking. The response body is ignored.
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<(), BookingError> {
        let url = self.endpoint(&["bookings"]).map_err(BookingError::Submit)?;
        debug!("POST request to: {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", url, e);
                BookingError::Submit(FetchError::network(e.to_string()))
            })?;

        ensure_ok(&url, &response, "Failed to create booking").map_err(BookingError::Submit)?;

        info!("POST {} - Success", url);
        Ok(())
    }

    async fn get<T>(&self, url: Url, failure_message: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        debug!("GET request to: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", url, e);
            FetchError::network(e.to_string())
        })?;

        ensure_ok(&url, &response, failure_message)?;

        trace!("GET {} - Response received, parsing JSON", url);
        let data = response.json::<T>().await.map_err(|e| {
            error!("GET {} - Failed to parse response: {}", url, e);
            FetchError::decode(e.to_string())
        })?;

        info!("GET {} - Success", url);
        Ok(data)
    }
}

/// Rejects non-2xx responses with the caller's resource-specific message.
fn ensure_ok(url: &Url, response: &Response, failure_message: &str) -> Result<(), FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    error!("{} - HTTP error: {}", url, status);
    Err(FetchError::status(status.as_u16(), failure_message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> RentalApi {
        RentalApi::new(&ClientConfig {
            api_base_url: base.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoints_extend_the_base_path() {
        let api = api("http://localhost:3000/api");
        let url = api.endpoint(&["properties", "p1", "reviews"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/properties/p1/reviews");
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let api = api("http://localhost:3000/api/");
        let url = api.endpoint(&["bookings"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/bookings");
    }

    #[test]
    fn ids_are_percent_encoded() {
        let api = api("http://localhost:3000/api");
        let url = api.endpoint(&["properties", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/properties/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        let config = ClientConfig {
            api_base_url: "mailto:host@example.com".to_string(),
            ..ClientConfig::default()
        };
        assert!(RentalApi::new(&config).is_err());

        let config = ClientConfig {
            api_base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(RentalApi::new(&config).is_err());
    }
}
