use thiserror::Error;

/// Message relayed into `FetchState::Failed` when an error carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Failure of a remote fetch: the request never completed, the server
/// answered with a non-2xx status, or the body could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connection refused, timeout, CORS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the collaborator's resource-specific text
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network(detail.into())
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode(detail.into())
    }

    fn detail(&self) -> &str {
        match self {
            Self::Network(detail) | Self::Decode(detail) => detail,
            Self::Status { message, .. } => message,
        }
    }

    /// Human-readable message shown to the user.
    pub fn message(&self) -> String {
        if self.detail().trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors produced by the booking flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required form field was left empty; carries the field's label
    #[error("Please fill out the {0} field.")]
    MissingField(String),

    /// A custom validation rule rejected the form
    #[error("{0}")]
    Rejected(String),

    /// The booking endpoint refused the request or could not be reached
    #[error("Booking failed. Please check your details and try again.")]
    Submit(#[source] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_relays_its_message() {
        let err = FetchError::status(404, "not found");
        assert_eq!(err.message(), "not found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn blank_detail_falls_back_to_generic_message() {
        assert_eq!(FetchError::status(500, "").message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(FetchError::network("  ").message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn network_and_decode_errors_are_prefixed() {
        assert_eq!(
            FetchError::network("connection refused").message(),
            "Request failed: connection refused"
        );
        assert_eq!(
            FetchError::decode("expected value at line 1").message(),
            "Failed to parse response: expected value at line 1"
        );
    }

    #[test]
    fn submit_error_hides_transport_detail() {
        let err = BookingError::Submit(FetchError::status(502, "bad gateway"));
        assert_eq!(
            err.to_string(),
            "Booking failed. Please check your details and try again."
        );
    }
}
