// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted provider for deterministic tests.
//!
//! `MockProvider` pops one [`MockReply`] per `complete` call and records
//! every request it receives so tests can assert on what the model was sent.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use easeentry_core::EaseEntryError;
use easeentry_core::traits::ProviderAdapter;
use easeentry_core::types::{ProviderRequest, ProviderResponse, TokenUsage, ToolCallRequest};
use tokio::sync::Mutex;

/// One scripted model reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A plain text answer.
    Text(String),
    /// A request to call tools, in order.
    ToolCalls(Vec<ToolCallRequest>),
    /// A provider failure with this message.
    Fail(String),
}

impl MockReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// A reply requesting a single tool call.
    pub fn tool_call(id: &str, name: &str, arguments: serde_json::Value) -> Self {
        Self::ToolCalls(vec![tool_call(id, name, arguments)])
    }
}

/// Build a [`ToolCallRequest`] with JSON-encoded arguments.
pub fn tool_call(id: &str, name: &str, arguments: serde_json::Value) -> ToolCallRequest {
    ToolCallRequest {
        id: id.to_string(),
        name: name.to_string(),
        arguments: arguments.to_string(),
    }
}

/// A provider that replays a queue of scripted replies.
///
/// When the queue is empty, the text "mock response" is returned.
#[derive(Clone, Default)]
pub struct MockProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<ProviderRequest>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            requests: Arc::default(),
        }
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, EaseEntryError> {
        let model = request.model.clone();
        self.requests.lock().await.push(request);

        let reply = self
            .replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockReply::text("mock response"));

        let (content, tool_calls, finish_reason) = match reply {
            MockReply::Text(text) => (Some(text), Vec::new(), "stop"),
            MockReply::ToolCalls(calls) => (None, calls, "tool_calls"),
            MockReply::Fail(message) => return Err(EaseEntryError::provider(message)),
        };

        Ok(ProviderResponse {
            id: format!("mock-resp-{}", uuid::Uuid::new_v4()),
            model,
            content,
            tool_calls,
            finish_reason: Some(finish_reason.to_string()),
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
            },
        })
    }
}
