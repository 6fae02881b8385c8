// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the EaseEntry booking REST API.
//!
//! Each operation issues at most one request. There is no retry and no
//! idempotency guard: calling [`BookingClient::create_booking`] twice books twice.

use std::sync::LazyLock;

use easeentry_config::{BookingConfig, EmailValidation};
use easeentry_core::EaseEntryError;
use regex::Regex;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::coerce::coerce_integer;
use crate::error::BookingError;
use crate::types::{BookingConfirmation, BookingRequest, TicketEnvelope, TicketInfo};

const NUMERIC_BOOKING_FIELDS: &str = "Phone number and tickets must be numerical values.";
const NUMERIC_TICKET_ID: &str = "Ticket ID must be a numerical value.";
const INVALID_EMAIL: &str = "Invalid email address.";
const TICKET_NOT_FOUND: &str = "No ticket information found.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// Client for the booking service.
#[derive(Debug, Clone)]
pub struct BookingClient {
    client: reqwest::Client,
    base_url: String,
    email_validation: EmailValidation,
}

impl BookingClient {
    /// Build a client from the `[booking]` configuration section.
    pub fn new(config: &BookingConfig) -> Result<Self, EaseEntryError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| EaseEntryError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            email_validation: config.email_validation,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Book `ticket_count` tickets for `email`.
    ///
    /// `phone` and `ticket_count` are coerced to integers first; if either
    /// fails, or the email is rejected in strict mode, nothing is sent.
    pub async fn create_booking(
        &self,
        email: &str,
        phone: &Value,
        ticket_count: &Value,
    ) -> Result<BookingConfirmation, BookingError> {
        let (Some(phone), Some(ticks)) = (coerce_integer(phone), coerce_integer(ticket_count))
        else {
            return Err(BookingError::Validation(NUMERIC_BOOKING_FIELDS.to_string()));
        };

        if self.email_validation == EmailValidation::Strict && !EMAIL_PATTERN.is_match(email) {
            return Err(BookingError::Validation(INVALID_EMAIL.to_string()));
        }

        let body = BookingRequest {
            booking_email: email.to_string(),
            phone,
            ticks,
        };

        let response = self
            .client
            .post(self.url("bookings"))
            .json(&body)
            .send()
            .await
            .map_err(|e| BookingError::transport(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| BookingError::transport(&e))?;
        debug!(status = %status, "booking response received");

        let has_message = serde_json::from_str::<Value>(&text)
            .ok()
            .is_some_and(|v| v.get("message").is_some());

        if status == StatusCode::CREATED && has_message {
            info!(ticks, "booking created");
            Ok(BookingConfirmation::default())
        } else {
            warn!(status = %status, "booking rejected by service");
            Err(BookingError::UnexpectedResponse {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    /// Look up the booking record for `ticket_id`.
    pub async fn get_ticket_info(&self, ticket_id: &Value) -> Result<TicketInfo, BookingError> {
        let id = coerce_integer(ticket_id)
            .ok_or_else(|| BookingError::Validation(NUMERIC_TICKET_ID.to_string()))?;

        let response = self
            .client
            .get(self.url(&format!("bookings/{id}")))
            .send()
            .await
            .map_err(|e| BookingError::transport(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| BookingError::transport(&e))?;
        debug!(status = %status, ticket_id = id, "ticket lookup response received");

        if !status.is_success() {
            return Err(BookingError::UnexpectedResponse {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: TicketEnvelope =
            serde_json::from_str(&text).map_err(|_| BookingError::UnexpectedResponse {
                status: status.as_u16(),
                body: text.clone(),
            })?;

        let first = match envelope.data {
            Some(Value::Array(records)) => records.into_iter().next(),
            _ => None,
        };
        let Some(record) = first else {
            return Err(BookingError::NotFound(TICKET_NOT_FOUND.to_string()));
        };

        serde_json::from_value(record).map_err(|_| BookingError::UnexpectedResponse {
            status: status.as_u16(),
            body: text,
        })
    }

    /// Fetch the museum's public information document, unchanged.
    pub async fn get_website_information(&self) -> Result<Value, BookingError> {
        let response = self
            .client
            .get(self.url("websiteinformation"))
            .send()
            .await
            .map_err(|e| BookingError::transport(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "website information unavailable");
            return Err(BookingError::Unavailable {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| BookingError::transport(&e))?;
        serde_json::from_str(&text).map_err(|_| BookingError::UnexpectedResponse {
            status: status.as_u16(),
            body: text,
        })
    }
}
