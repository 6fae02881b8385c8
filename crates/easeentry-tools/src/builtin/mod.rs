// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in tools backed by the booking service.

pub mod booking;

pub use booking::{DoBookingTool, GetTicketInfoTool, GetWebsiteInformationTool};

use std::sync::Arc;

use easeentry_booking::BookingClient;
use easeentry_core::EaseEntryError;

use crate::ToolRegistry;

/// Register the three booking tools, all sharing `client`.
pub fn register_builtins(
    registry: &mut ToolRegistry,
    client: Arc<BookingClient>,
) -> Result<(), EaseEntryError> {
    registry.register(Arc::new(DoBookingTool::new(Arc::clone(&client))))?;
    registry.register(Arc::new(GetTicketInfoTool::new(Arc::clone(&client))))?;
    registry.register(Arc::new(GetWebsiteInformationTool::new(client)))?;
    Ok(())
}
