// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the EaseEntry booking assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level EaseEntry configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to values that talk to the public
/// EaseEntry booking service and the Groq chat-completions endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EaseEntryConfig {
    /// Assistant identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Language model provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Remote booking service settings.
    #[serde(default)]
    pub booking: BookingConfig,
}

impl EaseEntryConfig {
    /// Returns a copy with secrets replaced, suitable for printing.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.provider.api_key.is_some() {
            copy.provider.api_key = Some("<redacted>".to_string());
        }
        copy
    }
}

/// Assistant identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Name the assistant introduces itself with.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline system prompt string. Overridden by `system_prompt_file` if both set.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Path to a text file containing the system prompt.
    /// Takes precedence over `system_prompt` if both are set.
    #[serde(default)]
    pub system_prompt_file: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: None,
            system_prompt_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "EaseEntry AI".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Chat-completion provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key. `None` falls back to the `GROQ_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Full URL of the OpenAI-compatible chat-completions endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for the tool-selecting call.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate for the tool-selecting call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    4096
}

/// How strictly the booking email is checked before calling the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailValidation {
    /// Any string is forwarded to the booking service.
    #[default]
    Lenient,
    /// The email must look like `local@domain.tld`.
    Strict,
}

/// Remote booking service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Base URL of the booking REST API (without the `/api` suffix).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page where visitors complete payment after booking.
    #[serde(default = "default_payment_url")]
    pub payment_url: String,

    /// Email validation strictness for new bookings.
    #[serde(default)]
    pub email_validation: EmailValidation,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            payment_url: default_payment_url(),
            email_validation: EmailValidation::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://easeentry-api.vercel.app".to_string()
}

fn default_payment_url() -> String {
    "https://athena-payment.vercel.app/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_services() {
        let config = EaseEntryConfig::default();
        assert_eq!(config.agent.name, "EaseEntry AI");
        assert_eq!(config.provider.model, "llama3-70b-8192");
        assert_eq!(config.provider.max_tokens, 4096);
        assert!((config.provider.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.booking.base_url, "https://easeentry-api.vercel.app");
        assert_eq!(config.booking.email_validation, EmailValidation::Lenient);
    }

    #[test]
    fn email_validation_parses_lowercase() {
        let booking: BookingConfig = toml::from_str("email_validation = \"strict\"").unwrap();
        assert_eq!(booking.email_validation, EmailValidation::Strict);
        assert!(toml::from_str::<BookingConfig>("email_validation = \"Strict\"").is_err());
    }

    #[test]
    fn redacted_hides_api_key() {
        let mut config = EaseEntryConfig::default();
        config.provider.api_key = Some("gsk-secret".into());
        let redacted = config.redacted();
        assert_eq!(redacted.provider.api_key.as_deref(), Some("<redacted>"));
        assert_eq!(config.provider.api_key.as_deref(), Some("gsk-secret"));
    }

    #[test]
    fn redacted_leaves_missing_key_unset() {
        let config = EaseEntryConfig::default();
        assert!(config.redacted().provider.api_key.is_none());
    }
}
