// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the EaseEntry booking assistant.
//!
//! This crate provides the error type, the chat and provider message types,
//! and the [`ProviderAdapter`] trait that model integrations implement.

pub mod error;
pub mod traits;
pub mod types;

pub use error::EaseEntryError;
pub use traits::ProviderAdapter;
pub use types::{
    ChatTurn, ProviderMessage, ProviderRequest, ProviderResponse, Role, TokenUsage, ToolCallRequest,
    ToolChoice,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn easeentry_error_has_all_variants() {
        let config = EaseEntryError::Config("test".into());
        assert_eq!(config.to_string(), "configuration error: test");

        let provider = EaseEntryError::provider("boom");
        assert_eq!(provider.to_string(), "provider error: boom");

        let tool = EaseEntryError::Tool {
            message: "bad".into(),
            source: Some(Box::new(std::io::Error::other("io"))),
        };
        assert_eq!(tool.to_string(), "tool error: bad");

        let internal = EaseEntryError::Internal("x".into());
        assert_eq!(internal.to_string(), "internal error: x");
    }

    #[test]
    fn role_display_and_parse_are_lowercase() {
        for role in [Role::System, Role::User, Role::Assistant, Role::Tool] {
            let s = role.to_string();
            assert_eq!(s, s.to_lowercase());
            assert_eq!(Role::from_str(&s).unwrap(), role);
        }
        assert_eq!(serde_json::to_string(&Role::Tool).unwrap(), "\"tool\"");
    }

    #[test]
    fn chat_turn_constructors_set_roles() {
        assert_eq!(ChatTurn::system("s").role, Role::System);
        assert_eq!(ChatTurn::user("u").role, Role::User);
        assert_eq!(ChatTurn::assistant("a").role, Role::Assistant);
    }

    #[test]
    fn tool_call_arguments_decode() {
        let call = ToolCallRequest {
            id: "call_1".into(),
            name: "get_ticket_info".into(),
            arguments: r#"{"ticket_id": 42}"#.into(),
        };
        assert_eq!(call.parse_arguments().unwrap()["ticket_id"], 42);

        let empty = ToolCallRequest {
            arguments: String::new(),
            ..call.clone()
        };
        assert!(empty.parse_arguments().unwrap().as_object().unwrap().is_empty());

        let broken = ToolCallRequest {
            arguments: "{not json".into(),
            ..call
        };
        assert!(broken.parse_arguments().is_err());
    }

    #[test]
    fn tool_result_message_carries_call_id_and_name() {
        let msg = ProviderMessage::tool_result("call_9", "do_booking", "{}");
        assert_eq!(msg.role, Role::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_9"));
        assert_eq!(msg.name.as_deref(), Some("do_booking"));
        assert!(msg.tool_calls.is_empty());
    }

    #[test]
    fn tool_choice_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ToolChoice::Auto).unwrap(), "\"auto\"");
        assert_eq!(ToolChoice::Auto.to_string(), "auto");
    }
}
