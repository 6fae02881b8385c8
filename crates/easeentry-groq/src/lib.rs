// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Groq provider adapter.
//!
//! Implements [`ProviderAdapter`] over the OpenAI-compatible chat-completions
//! API, which Groq serves. Any endpoint speaking that format works.

pub mod client;
pub mod types;

use async_trait::async_trait;
use easeentry_config::ProviderConfig;
use easeentry_core::EaseEntryError;
use easeentry_core::traits::ProviderAdapter;
use easeentry_core::types::{
    ProviderMessage, ProviderRequest, ProviderResponse, TokenUsage, ToolCallRequest,
};
use tracing::{debug, info};

use crate::client::GroqClient;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, WireFunction, WireMessage, WireToolCall,
};

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Chat-completion provider backed by [`GroqClient`].
pub struct GroqProvider {
    client: GroqClient,
}

impl GroqProvider {
    /// Build the provider from the `[provider]` config section.
    ///
    /// The API key comes from `provider.api_key`, then `GROQ_API_KEY`.
    pub fn new(config: &ProviderConfig) -> Result<Self, EaseEntryError> {
        let api_key = resolve_api_key(config.api_key.as_deref())?;
        let client = GroqClient::new(&api_key, config.endpoint.clone())?;
        info!(
            endpoint = %config.endpoint,
            model = %config.model,
            "Groq provider initialized"
        );
        Ok(Self { client })
    }

    pub fn with_client(client: GroqClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderAdapter for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, EaseEntryError> {
        let wire = to_wire_request(request);
        debug!(
            messages = wire.messages.len(),
            tools = wire.tools.as_ref().map_or(0, Vec::len),
            "sending completion request"
        );
        let response = self.client.complete(&wire).await?;
        from_wire_response(response)
    }
}

fn resolve_api_key(config_key: Option<&str>) -> Result<String, EaseEntryError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(EaseEntryError::Config(format!(
            "Groq API key not found. Set provider.api_key in config or the {API_KEY_ENV} environment variable."
        ))),
    }
}

fn to_wire_message(message: ProviderMessage) -> WireMessage {
    WireMessage {
        role: message.role.to_string(),
        content: message.content,
        tool_calls: message
            .tool_calls
            .into_iter()
            .map(|call| WireToolCall {
                id: call.id,
                kind: "function".to_string(),
                function: WireFunction {
                    name: call.name,
                    arguments: call.arguments,
                },
            })
            .collect(),
        tool_call_id: message.tool_call_id,
        name: message.name,
    }
}

pub(crate) fn to_wire_request(request: ProviderRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: request.model,
        messages: request.messages.into_iter().map(to_wire_message).collect(),
        tools: request.tools.filter(|tools| !tools.is_empty()),
        tool_choice: request.tool_choice.map(|choice| choice.to_string()),
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    }
}

pub(crate) fn from_wire_response(
    response: ChatCompletionResponse,
) -> Result<ProviderResponse, EaseEntryError> {
    let ChatCompletionResponse {
        id,
        model,
        choices,
        usage,
    } = response;

    let choice = choices
        .into_iter()
        .next()
        .ok_or_else(|| EaseEntryError::provider("completion response contained no choices"))?;

    let tool_calls = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| ToolCallRequest {
            id: call.id,
            name: call.function.name,
            arguments: call.function.arguments,
        })
        .collect();

    let usage = usage.unwrap_or_default();
    Ok(ProviderResponse {
        id,
        model,
        content: choice.message.content,
        tool_calls,
        finish_reason: choice.finish_reason,
        usage: TokenUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use easeentry_core::types::{ChatTurn, ToolChoice};
    use serde_json::json;

    #[test]
    fn api_key_from_config_wins() {
        assert_eq!(resolve_api_key(Some("gsk-config")).unwrap(), "gsk-config");
    }

    #[test]
    fn empty_config_key_falls_back_to_env() {
        // Succeeds only when GROQ_API_KEY is set; either way the key is never empty.
        match resolve_api_key(Some("")) {
            Ok(key) => assert!(!key.is_empty()),
            Err(err) => assert!(err.to_string().contains("API key not found")),
        }
    }

    #[test]
    fn request_conversion_keeps_tool_round_trip_fields() {
        let call = ToolCallRequest {
            id: "call_1".into(),
            name: "get_ticket_info".into(),
            arguments: r#"{"ticket_id":5}"#.into(),
        };
        let request = ProviderRequest {
            model: "llama3-70b-8192".into(),
            messages: vec![
                ProviderMessage::from(&ChatTurn::system("rules")),
                ProviderMessage::from(&ChatTurn::user("where is ticket 5?")),
                ProviderMessage::assistant_tool_calls(None, vec![call]),
                ProviderMessage::tool_result("call_1", "get_ticket_info", r#"{"amount":100}"#),
            ],
            tools: Some(vec![json!({"type": "function"})]),
            tool_choice: Some(ToolChoice::Auto),
            temperature: Some(0.3),
            max_tokens: Some(4096),
        };

        let wire = serde_json::to_value(to_wire_request(request)).unwrap();
        assert_eq!(wire["tool_choice"], "auto");
        assert_eq!(wire["messages"][0]["role"], "system");
        assert_eq!(wire["messages"][2]["role"], "assistant");
        assert!(wire["messages"][2].get("content").is_none());
        assert_eq!(wire["messages"][2]["tool_calls"][0]["type"], "function");
        assert_eq!(
            wire["messages"][2]["tool_calls"][0]["function"]["arguments"],
            r#"{"ticket_id":5}"#
        );
        assert_eq!(wire["messages"][3]["role"], "tool");
        assert_eq!(wire["messages"][3]["tool_call_id"], "call_1");
        assert_eq!(wire["messages"][3]["name"], "get_ticket_info");
    }

    #[test]
    fn follow_up_request_has_no_tool_fields() {
        let request = ProviderRequest {
            model: "llama3-70b-8192".into(),
            messages: vec![ProviderMessage::from(&ChatTurn::user("hi"))],
            tools: None,
            tool_choice: None,
            temperature: None,
            max_tokens: None,
        };
        let wire = serde_json::to_value(to_wire_request(request)).unwrap();
        let keys: Vec<&String> = wire.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2, "got keys {keys:?}");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({"id": "x", "model": "m", "choices": []})).unwrap();
        assert!(from_wire_response(response).is_err());
    }

    #[test]
    fn response_conversion_preserves_call_order() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-9",
            "model": "llama3-70b-8192",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "tool_calls": [
                        {"id": "a", "type": "function", "function": {"name": "do_booking", "arguments": "{}"}},
                        {"id": "b", "type": "function", "function": {"name": "get_website_information", "arguments": ""}}
                    ]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4}
        }))
        .unwrap();

        let converted = from_wire_response(response).unwrap();
        assert!(converted.has_tool_calls());
        let ids: Vec<&str> = converted.tool_calls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(converted.usage.completion_tokens, 4);
        assert_eq!(converted.finish_reason.as_deref(), Some("tool_calls"));
    }
}
