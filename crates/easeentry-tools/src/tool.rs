// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and the typed tool registry.
//!
//! Every tool the model may call has a [`ToolId`]. The [`ToolRegistry`] maps
//! ids to implementations, is checked for completeness at startup, and
//! renders the function-style definitions sent with each completion request.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use easeentry_core::EaseEntryError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Identifier of a model-callable tool. The string form is the wire name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    DoBooking,
    GetTicketInfo,
    GetWebsiteInformation,
}

/// Output of one tool invocation.
///
/// `content` is always a JSON document: the success payload, or
/// `{"error": "..."}` when `is_error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: String,
    pub is_error: bool,
}

impl ToolOutput {
    /// Serialize `payload` as a successful result.
    pub fn success<T: Serialize>(payload: &T) -> Result<Self, EaseEntryError> {
        let content = serde_json::to_string(payload).map_err(|e| EaseEntryError::Tool {
            message: format!("failed to serialize tool result: {e}"),
            source: Some(Box::new(e)),
        })?;
        Ok(Self {
            content,
            is_error: false,
        })
    }

    /// An `{"error": message}` result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: serde_json::json!({ "error": message.into() }).to_string(),
            is_error: true,
        }
    }
}

/// The outcome of one tool call, tagged with its originating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    pub call_id: String,
    pub name: String,
    pub output: ToolOutput,
}

/// A tool the model can call.
#[async_trait]
pub trait Tool: Send + Sync {
    fn id(&self) -> ToolId;

    /// Wire name. Must equal the string form of [`Tool::id`].
    fn name(&self) -> &str {
        self.id().into()
    }

    fn description(&self) -> &str;

    /// JSON Schema of the tool arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Run the tool. Domain failures are returned as [`ToolOutput::error`];
    /// `Err` is reserved for faults in the tool machinery itself.
    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, EaseEntryError>;
}

/// Registry of tools keyed by [`ToolId`].
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<ToolId, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any previous tool with the same id.
    ///
    /// Fails if the tool's name disagrees with its id.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), EaseEntryError> {
        let id = tool.id();
        if tool.name() != id.to_string() {
            return Err(EaseEntryError::Config(format!(
                "tool name `{}` does not match its id `{id}`",
                tool.name()
            )));
        }
        self.tools.insert(id, tool);
        Ok(())
    }

    /// Check that every [`ToolId`] has an implementation.
    pub fn validate(&self) -> Result<(), EaseEntryError> {
        let missing: Vec<String> = ToolId::iter()
            .filter(|id| !self.tools.contains_key(id))
            .map(|id| id.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EaseEntryError::Config(format!(
                "no implementation registered for tools: {}",
                missing.join(", ")
            )))
        }
    }

    pub fn get(&self, id: ToolId) -> Option<Arc<dyn Tool>> {
        self.tools.get(&id).cloned()
    }

    /// Look up a tool by the name the model used.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Tool>> {
        name.parse::<ToolId>().ok().and_then(|id| self.get(id))
    }

    /// Function-style tool definitions, sorted by name:
    ///
    /// ```json
    /// {"type": "function", "function": {"name": "...", "description": "...", "parameters": {...}}}
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
