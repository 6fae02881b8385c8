// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request and response shapes of the booking service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub booking_email: String,
    pub phone: i64,
    pub ticks: i64,
}

/// Result reported to the model after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
}

impl Default for BookingConfirmation {
    fn default() -> Self {
        Self {
            success: true,
            message: "Booking successful".to_string(),
        }
    }
}

/// One booking record.
///
/// The service uses kebab-case keys for the email and id; the record is
/// re-serialized with snake_case keys. Missing fields become `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TicketInfo {
    #[serde(default)]
    pub amount: Value,
    #[serde(default, rename(deserialize = "booking-email"))]
    pub booking_email: Value,
    #[serde(default, rename(deserialize = "booking-id"))]
    pub booking_id: Value,
    #[serde(default)]
    pub validity: Value,
}

/// Envelope of `GET /api/bookings/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct TicketEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ticket_info_maps_kebab_keys() {
        let info: TicketInfo = serde_json::from_value(json!({
            "amount": 200,
            "booking-email": "a@b.com",
            "booking-id": 17,
            "validity": "2026-10-19",
            "extra": "ignored"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({
                "amount": 200,
                "booking_email": "a@b.com",
                "booking_id": 17,
                "validity": "2026-10-19"
            })
        );
    }

    #[test]
    fn missing_ticket_fields_are_null() {
        let info: TicketInfo = serde_json::from_value(json!({"amount": 100})).unwrap();
        assert_eq!(info.booking_email, Value::Null);
        assert_eq!(info.validity, Value::Null);
    }

    #[test]
    fn confirmation_serializes_fixed_message() {
        assert_eq!(
            serde_json::to_value(BookingConfirmation::default()).unwrap(),
            json!({"success": true, "message": "Booking successful"})
        );
    }
}
