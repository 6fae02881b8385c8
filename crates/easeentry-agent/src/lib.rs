// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation state and the tool-dispatch loop of the EaseEntry assistant.

pub mod dispatch;
pub mod prompt;
pub mod session;

pub use dispatch::{DispatchLoop, DispatchSettings, TurnOutcome, TurnState};
pub use prompt::load_system_prompt;
pub use session::Session;
