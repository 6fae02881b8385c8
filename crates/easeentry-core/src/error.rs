// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the EaseEntry booking assistant.

use thiserror::Error;

/// The primary error type for infrastructure faults.
///
/// Booking API failures are not represented here: they are captured as
/// structured tool results and handed back to the model instead.
#[derive(Debug, Error)]
pub enum EaseEntryError {
    /// Configuration errors (missing API key, incomplete tool registry, bad header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Language model API errors (transport failure, non-success status, malformed body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A tool could not be invoked at all.
    #[error("tool error: {message}")]
    Tool {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EaseEntryError {
    /// Shorthand for a provider error without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }
}
