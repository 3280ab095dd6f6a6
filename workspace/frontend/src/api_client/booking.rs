use common::{BookingError, BookingRequest};
use crate::api_client;

/// Submit a booking. Payment fields are forwarded untouched.
pub async fn create_booking(request: &BookingRequest) -> Result<(), BookingError> {
    log::debug!("Submitting booking for {} {}", request.first_name, request.last_name);
    let result = api_client::post("/bookings", request, "Booking failed")
        .await
        .map_err(BookingError::Submit);
    match &result {
        Ok(()) => log::info!("Booking accepted"),
        Err(e) => log::error!("Failed to submit booking: {:?}", e),
    }
    result
}
