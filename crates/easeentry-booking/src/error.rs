// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failure taxonomy of the booking service client.
//!
//! These errors never escape as faults: the tool layer turns their
//! `Display` text into an `{"error": ...}` payload for the model.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Arguments rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered but holds no matching record.
    #[error("{0}")]
    NotFound(String),

    /// The service answered with a status or body we cannot use.
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// The information endpoint answered with a non-200 status.
    #[error("API returned status code {status}")]
    Unavailable { status: u16 },

    /// The request could not be completed.
    #[error("Request failed: {0}")]
    Transport(String),
}

impl BookingError {
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_not_found_show_message_verbatim() {
        assert_eq!(
            BookingError::Validation("Invalid email address.".into()).to_string(),
            "Invalid email address."
        );
        assert_eq!(
            BookingError::NotFound("No ticket information found.".into()).to_string(),
            "No ticket information found."
        );
    }

    #[test]
    fn unexpected_response_includes_body() {
        let err = BookingError::UnexpectedResponse {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "Unexpected response (HTTP 500): boom");
    }

    #[test]
    fn unexpected_response_with_empty_body_keeps_status_context() {
        let err = BookingError::UnexpectedResponse {
            status: 200,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Unexpected response (HTTP 200): ");
    }

    #[test]
    fn unavailable_reports_status() {
        let err = BookingError::Unavailable { status: 503 };
        assert_eq!(err.to_string(), "API returned status code 503");
    }

    #[test]
    fn transport_shows_cause() {
        let err = BookingError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
