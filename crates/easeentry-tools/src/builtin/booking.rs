// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three booking-service tools.
//!
//! Booking failures never surface as `Err`: they become `{"error": ...}`
//! payloads the model can explain to the visitor.

use std::sync::Arc;

use async_trait::async_trait;
use easeentry_booking::{BookingClient, BookingError};
use easeentry_core::EaseEntryError;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::tool::{Tool, ToolId, ToolOutput};

fn arg<'a>(input: &'a Value, key: &str) -> &'a Value {
    input.get(key).unwrap_or(&Value::Null)
}

fn into_output<T: Serialize>(
    tool: ToolId,
    result: Result<T, BookingError>,
) -> Result<ToolOutput, EaseEntryError> {
    match result {
        Ok(payload) => ToolOutput::success(&payload),
        Err(err) => {
            debug!(tool = %tool, error = %err, "booking call failed");
            Ok(ToolOutput::error(err.to_string()))
        }
    }
}

/// Creates a booking.
pub struct DoBookingTool {
    client: Arc<BookingClient>,
}

impl DoBookingTool {
    pub fn new(client: Arc<BookingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for DoBookingTool {
    fn id(&self) -> ToolId {
        ToolId::DoBooking
    }

    fn description(&self) -> &str {
        "Make a booking with the provided email, phone, and number of tickets. \
         A result with success true means the booking was made; anything else means it was not."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "booking_email": {
                    "type": "string",
                    "description": "Email address used for booking"
                },
                "phone": {
                    "type": "string",
                    "description": "Phone number associated with the booking"
                },
                "ticks": {
                    "type": "integer",
                    "description": "Number of tickets to book"
                }
            },
            "required": ["booking_email", "phone", "ticks"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<ToolOutput, EaseEntryError> {
        let Some(email) = arg(&input, "booking_email").as_str() else {
            return Ok(ToolOutput::error("An email address is required for booking."));
        };
        let result = self
            .client
            .create_booking(email, arg(&input, "phone"), arg(&input, "ticks"))
            .await;
        into_output(self.id(), result)
    }
}

/// Looks up a booking by ticket id.
pub struct GetTicketInfoTool {
    client: Arc<BookingClient>,
}

impl GetTicketInfoTool {
    pub fn new(client: Arc<BookingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetTicketInfoTool {
    fn id(&self) -> ToolId {
        ToolId::GetTicketInfo
    }

    fn description(&self) -> &str {
        "Retrieve information about a booking using the ticket ID"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "ticket_id": {
                    "type": "integer",
                    "description": "The ID of the ticket to retrieve information for"
                }
            },
            "required": ["ticket_id"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<ToolOutput, EaseEntryError> {
        let result = self.client.get_ticket_info(arg(&input, "ticket_id")).await;
        into_output(self.id(), result)
    }
}

/// Fetches the museum's public information.
pub struct GetWebsiteInformationTool {
    client: Arc<BookingClient>,
}

impl GetWebsiteInformationTool {
    pub fn new(client: Arc<BookingClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetWebsiteInformationTool {
    fn id(&self) -> ToolId {
        ToolId::GetWebsiteInformation
    }

    fn description(&self) -> &str {
        "Retrieves the information asked by the user regarding the Athena Museum, \
         main events, timings and other details."
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn invoke(&self, _input: Value) -> Result<ToolOutput, EaseEntryError> {
        let result = self.client.get_website_information().await;
        into_output(self.id(), result)
    }
}
