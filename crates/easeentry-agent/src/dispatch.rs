// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tool-dispatch loop.
//!
//! One user turn goes through at most two model calls:
//!
//! 1. The initial completion sees the system prompt, the session so far and
//!    every tool definition, and either answers or asks for tool calls.
//! 2. If tools were requested, each call runs in order and its result is
//!    appended to a per-turn transcript, which is then sent back without
//!    tools for the final answer.
//!
//! Only the user turn and the final assistant reply are written to the
//! [`Session`]; tool traffic lives and dies with the turn.

use std::sync::Arc;

use easeentry_config::EaseEntryConfig;
use easeentry_core::EaseEntryError;
use easeentry_core::traits::ProviderAdapter;
use easeentry_core::types::{
    ChatTurn, ProviderMessage, ProviderRequest, ToolCallRequest, ToolChoice,
};
use easeentry_tools::{ToolOutput, ToolRegistry, ToolResult};
use tracing::{debug, info, warn};

use crate::session::Session;

/// Where the loop is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput,
    InitialCompletion,
    ToolDispatch,
    FollowUpCompletion,
    Responding,
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::AwaitingInput => write!(f, "awaiting_input"),
            TurnState::InitialCompletion => write!(f, "initial_completion"),
            TurnState::ToolDispatch => write!(f, "tool_dispatch"),
            TurnState::FollowUpCompletion => write!(f, "follow_up_completion"),
            TurnState::Responding => write!(f, "responding"),
        }
    }
}

/// Model parameters for the initial completion.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl DispatchSettings {
    pub fn from_config(config: &EaseEntryConfig, system_prompt: String) -> Self {
        Self {
            model: config.provider.model.clone(),
            system_prompt,
            temperature: config.provider.temperature,
            max_tokens: config.provider.max_tokens,
        }
    }
}

/// What one turn produced.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The assistant reply, also appended to the session.
    pub reply: String,
    /// Results of every tool call made during the turn, in call order.
    pub tool_results: Vec<ToolResult>,
}

pub struct DispatchLoop {
    provider: Arc<dyn ProviderAdapter>,
    registry: Arc<ToolRegistry>,
    settings: DispatchSettings,
    state: TurnState,
}

impl DispatchLoop {
    /// Fails if `registry` lacks an implementation for any tool id.
    pub fn new(
        provider: Arc<dyn ProviderAdapter>,
        registry: Arc<ToolRegistry>,
        settings: DispatchSettings,
    ) -> Result<Self, EaseEntryError> {
        registry.validate()?;
        info!(
            provider = provider.name(),
            model = %settings.model,
            tools = registry.len(),
            "dispatch loop ready"
        );
        Ok(Self {
            provider,
            registry,
            settings,
            state: TurnState::AwaitingInput,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Run one conversational turn.
    ///
    /// The user turn is appended first and stays in the session even when a
    /// model call fails; in that case no assistant turn is added and the
    /// error is returned so the caller can let the user retry.
    pub async fn handle_turn(
        &mut self,
        session: &mut Session,
        input: &str,
    ) -> Result<TurnOutcome, EaseEntryError> {
        session.append_user(input);
        let result = self.run_turn(session).await;
        if let Err(e) = &result {
            warn!(session_id = %session.id(), state = %self.state, error = %e, "turn failed");
        }
        self.state = TurnState::AwaitingInput;
        result
    }

    async fn run_turn(&mut self, session: &mut Session) -> Result<TurnOutcome, EaseEntryError> {
        let mut transcript = Vec::with_capacity(session.len() + 1);
        transcript.push(ProviderMessage::from(&ChatTurn::system(
            self.settings.system_prompt.as_str(),
        )));
        transcript.extend(session.turns().iter().map(ProviderMessage::from));

        self.state = TurnState::InitialCompletion;
        let first = self
            .provider
            .complete(ProviderRequest {
                model: self.settings.model.clone(),
                messages: transcript.clone(),
                tools: Some(self.registry.tool_definitions()),
                tool_choice: Some(ToolChoice::Auto),
                temperature: Some(self.settings.temperature),
                max_tokens: Some(self.settings.max_tokens),
            })
            .await?;
        debug!(
            session_id = %session.id(),
            tool_calls = first.tool_calls.len(),
            prompt_tokens = first.usage.prompt_tokens,
            "initial completion received"
        );

        let (reply, tool_results) = if first.has_tool_calls() {
            self.state = TurnState::ToolDispatch;
            transcript.push(ProviderMessage::assistant_tool_calls(
                first.content.clone(),
                first.tool_calls.clone(),
            ));

            let mut results = Vec::with_capacity(first.tool_calls.len());
            for call in &first.tool_calls {
                let output = self.dispatch(call).await;
                transcript.push(ProviderMessage::tool_result(
                    call.id.as_str(),
                    call.name.as_str(),
                    output.content.as_str(),
                ));
                results.push(ToolResult {
                    call_id: call.id.clone(),
                    name: call.name.clone(),
                    output,
                });
            }

            self.state = TurnState::FollowUpCompletion;
            let second = self
                .provider
                .complete(ProviderRequest {
                    model: self.settings.model.clone(),
                    messages: transcript,
                    tools: None,
                    tool_choice: None,
                    temperature: None,
                    max_tokens: None,
                })
                .await?;
            if second.has_tool_calls() {
                warn!(
                    session_id = %session.id(),
                    count = second.tool_calls.len(),
                    "ignoring tool calls in follow-up completion"
                );
            }
            (second.content.unwrap_or_default(), results)
        } else {
            (first.content.unwrap_or_default(), Vec::new())
        };

        self.state = TurnState::Responding;
        session.append_assistant(reply.as_str());
        info!(
            session_id = %session.id(),
            tools_used = tool_results.len(),
            turns = session.len(),
            "turn complete"
        );

        Ok(TurnOutcome {
            reply,
            tool_results,
        })
    }

    /// Resolve and run one tool call. Every failure becomes an error result.
    async fn dispatch(&self, call: &ToolCallRequest) -> ToolOutput {
        let Some(tool) = self.registry.resolve(&call.name) else {
            warn!(tool = %call.name, "model requested unknown tool");
            return ToolOutput::error(format!("Unknown tool: {}", call.name));
        };

        let input = match call.parse_arguments() {
            Ok(input) => input,
            Err(e) => {
                warn!(tool = %call.name, error = %e, "undecodable tool arguments");
                return ToolOutput::error(format!("Invalid arguments for {}: {e}", call.name));
            }
        };

        debug!(tool = %call.name, call_id = %call.id, "invoking tool");
        match tool.invoke(input).await {
            Ok(output) => output,
            Err(e) => {
                warn!(tool = %call.name, error = %e, "tool invocation failed");
                ToolOutput::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_state_display() {
        assert_eq!(TurnState::AwaitingInput.to_string(), "awaiting_input");
        assert_eq!(TurnState::ToolDispatch.to_string(), "tool_dispatch");
        assert_eq!(
            TurnState::FollowUpCompletion.to_string(),
            "follow_up_completion"
        );
    }

    #[test]
    fn settings_follow_provider_config() {
        let config = EaseEntryConfig::default();
        let settings = DispatchSettings::from_config(&config, "prompt".into());
        assert_eq!(settings.model, "llama3-70b-8192");
        assert_eq!(settings.max_tokens, 4096);
        assert_eq!(settings.system_prompt, "prompt");
    }
}
