// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompt resolution: file, then inline string, then the built-in
//! museum prompt.

use easeentry_config::{EaseEntryConfig, default_system_prompt};
use tracing::{info, warn};

/// Resolve the system prompt for `config`.
///
/// An unreadable or empty prompt file falls through to the next source.
pub async fn load_system_prompt(config: &EaseEntryConfig) -> String {
    if let Some(path) = &config.agent.system_prompt_file {
        match tokio::fs::read_to_string(path).await {
            Ok(content) if !content.trim().is_empty() => {
                info!(path = %path, "loaded system prompt from file");
                return content.trim().to_string();
            }
            Ok(_) => warn!(path = %path, "system prompt file is empty, falling back"),
            Err(e) => warn!(
                path = %path,
                error = %e,
                "failed to read system prompt file, falling back"
            ),
        }
    }

    if let Some(prompt) = &config.agent.system_prompt
        && !prompt.trim().is_empty()
    {
        return prompt.clone();
    }

    default_system_prompt(&config.agent.name, &config.booking.payment_url)
}
