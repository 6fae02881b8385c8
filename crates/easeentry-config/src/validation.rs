// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::EaseEntryConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &EaseEntryConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.agent.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "agent.log_level `{}` is not one of: {}",
            config.agent.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::validation("agent.name must not be empty"));
    }

    if config.provider.model.trim().is_empty() {
        errors.push(ConfigError::validation("provider.model must not be empty"));
    }

    let temperature = config.provider.temperature;
    if !(0.0..=2.0).contains(&temperature) {
        errors.push(ConfigError::validation(format!(
            "provider.temperature must be between 0.0 and 2.0, got {temperature}"
        )));
    }

    if config.provider.max_tokens == 0 {
        errors.push(ConfigError::validation(
            "provider.max_tokens must be greater than 0",
        ));
    }

    for (key, value) in [
        ("provider.endpoint", &config.provider.endpoint),
        ("booking.base_url", &config.booking.base_url),
        ("booking.payment_url", &config.booking.payment_url),
    ] {
        if !is_http_url(value) {
            errors.push(ConfigError::validation(format!(
                "{key} `{value}` must be an http:// or https:// URL"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}
