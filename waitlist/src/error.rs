//! Error types for the waitlist flow and the wording visitors see.
//!
//! Fetch failures surface as free-form strings from the browser, so the
//! user-facing message is picked by substring, not by type.

use thiserror::Error;

use crate::form::Field;

pub const NETWORK_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection and try again.";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const GENERIC_MESSAGE: &str =
    "An error occurred while submitting the form. Please try again later.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

const NETWORK_MARKERS: [&str; 3] = ["NetworkError", "Failed to fetch", "Network request failed"];
const VALIDATION_MARKERS: [&str; 2] = ["must be", "Please enter"];
const TIMEOUT_MARKER: &str = "timeout";

/// A submission rule rejected the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// A request could not be sent, or threw while in flight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a waitlist submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("could not encode submission: {0}")]
    Encode(String),
    /// Failure that carried no message at all
    #[error("unexpected submission failure")]
    Unexpected,
}

impl SubmitError {
    /// Message to show in the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => classify_message(err.message),
            SubmitError::Transport(err) => classify_message(&err.message),
            SubmitError::Encode(_) => GENERIC_MESSAGE.to_string(),
            SubmitError::Unexpected => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

/// Map a raw failure message onto the wording shown to visitors.
///
/// Network failures and timeouts get fixed copy; validation messages are
/// already written for humans and pass through; anything else passes
/// through unless empty.
pub fn classify_message(raw: &str) -> String {
    if NETWORK_MARKERS.iter().any(|m| raw.contains(m)) {
        return NETWORK_MESSAGE.to_string();
    }
    if VALIDATION_MARKERS.iter().any(|m| raw.contains(m)) {
        return raw.to_string();
    }
    if raw.contains(TIMEOUT_MARKER) {
        return TIMEOUT_MESSAGE.to_string();
    }
    if raw.is_empty() {
        GENERIC_MESSAGE.to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_markers_map_to_connection_copy() {
        for raw in [
            "TypeError: Failed to fetch",
            "NetworkError when attempting to fetch resource.",
            "Network request failed",
        ] {
            assert_eq!(classify_message(raw), NETWORK_MESSAGE, "{raw}");
        }
    }

    #[test]
    fn test_validation_messages_pass_through() {
        let raw = "Full name must be at least 2 characters long";
        assert_eq!(classify_message(raw), raw);
        assert_eq!(
            classify_message("Please enter a valid email address"),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_timeout_is_case_sensitive() {
        assert_eq!(classify_message("request timeout after 30s"), TIMEOUT_MESSAGE);
        // "Timeout" with a capital T is not a timeout marker
        assert_eq!(classify_message("Timeout"), "Timeout");
    }

    #[test]
    fn test_network_wins_over_timeout() {
        assert_eq!(
            classify_message("Failed to fetch: timeout"),
            NETWORK_MESSAGE
        );
    }

    #[test]
    fn test_unmatched_and_empty_messages() {
        assert_eq!(classify_message("HTTP 500"), "HTTP 500");
        assert_eq!(classify_message(""), GENERIC_MESSAGE);
        assert_eq!(SubmitError::Unexpected.user_message(), UNEXPECTED_MESSAGE);
    }

    #[test]
    fn test_submit_error_routes_through_classifier() {
        let err = SubmitError::from(TransportError::new("Failed to fetch"));
        assert_eq!(err.user_message(), NETWORK_MESSAGE);

        let err = SubmitError::from(ValidationError {
            field: Field::State,
            message: "State/Region must be at least 2 characters long",
        });
        assert_eq!(
            err.user_message(),
            "State/Region must be at least 2 characters long"
        );
        assert_eq!(err.to_string(), "State/Region must be at least 2 characters long");
    }
}
