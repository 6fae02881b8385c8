// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for the EaseEntry booking service: create bookings, look up
//! tickets, and fetch museum information.

pub mod client;
pub mod coerce;
pub mod error;
pub mod types;

pub use client::BookingClient;
pub use coerce::coerce_integer;
pub use error::BookingError;
pub use types::{BookingConfirmation, BookingRequest, TicketInfo};
