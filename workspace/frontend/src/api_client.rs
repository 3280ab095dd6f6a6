pub mod booking;
pub mod property;
pub mod review;

use common::FetchError;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use url::Url;
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Joins percent-encoded path segments into an endpoint such as `/properties/a%2Fb`.
pub fn endpoint(segments: &[&str]) -> String {
    // Any absolute base works; only the resulting path is kept.
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return format!("/{}", segments.join("/"));
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

/// Rejects non-2xx responses with the caller's resource-specific message.
fn ensure_ok(endpoint: &str, response: &Response, failure_message: &str) -> Result<(), FetchError> {
    if response.ok() {
        return Ok(());
    }
    log::error!("{} - HTTP error: {}", endpoint, response.status());
    Err(FetchError::status(response.status(), failure_message))
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str, failure_message: &str) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            log::error!("GET {} - Request failed: {}", endpoint, e);
            FetchError::network(e.to_string())
        })?;

    ensure_ok(endpoint, &response, failure_message)?;

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data = response
        .json::<T>()
        .await
        .map_err(|e| {
            log::error!("GET {} - Failed to parse response: {}", endpoint, e);
            FetchError::decode(e.to_string())
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Common POST request handler. The response body is not inspected.
pub async fn post<B>(endpoint: &str, body: &B, failure_message: &str) -> Result<(), FetchError>
where
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            FetchError::decode(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            FetchError::network(e.to_string())
        })?;

    ensure_ok(endpoint, &response, failure_message)?;

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_plain_segments() {
        assert_eq!(endpoint(&["properties"]), "/properties");
        assert_eq!(endpoint(&["properties", "p1", "reviews"]), "/properties/p1/reviews");
    }

    #[test]
    fn endpoint_encodes_reserved_characters_in_ids() {
        assert_eq!(endpoint(&["properties", "a/b c"]), "/properties/a%2Fb%20c");
        assert_eq!(endpoint(&["properties", "x?y#z", "reviews"]), "/properties/x%3Fy%23z/reviews");
    }
}
