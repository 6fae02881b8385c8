// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for chat-completion language model APIs.

use async_trait::async_trait;

use crate::error::EaseEntryError;
use crate::types::{ProviderRequest, ProviderResponse};

/// Adapter for a hosted chat-completion model.
///
/// A single call returns either text or a list of tool-call requests. Errors
/// are transport or protocol failures of the model API itself and are fatal
/// to the turn that issued them.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, EaseEntryError>;
}
