use anyhow::Result;
use common::{BOOKING_CONFIRMED_MESSAGE, BookingRequest, BookingValidator};
use tracing::{debug, error, info, trace};

use crate::api_client::RentalApi;

pub async fn book(api: &RentalApi, request: BookingRequest) -> Result<String> {
    trace!("Entering book command");

    if let Err(e) = BookingValidator::default().validate(&request) {
        debug!("Booking form rejected: {}", e);
        return Err(e.into());
    }

    info!("Submitting booking for {} {}", request.first_name, request.last_name);
    match api.create_booking(&request).await {
        Ok(()) => {
            info!("Booking accepted");
            Ok(BOOKING_CONFIRMED_MESSAGE.to_string())
        }
        Err(e) => {
            error!("Booking failed: {:?}", e);
            Err(e.into())
        }
    }
}
