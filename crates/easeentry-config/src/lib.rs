// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the EaseEntry booking assistant.
//!
//! TOML files and `EASEENTRY_*` environment variables are merged with
//! Figment, unknown keys are rejected, and every problem is reported as a
//! miette diagnostic.
//!
//! ```no_run
//! use easeentry_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Booking service: {}", config.booking.base_url);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod prompt;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AgentConfig, BookingConfig, EaseEntryConfig, EmailValidation, ProviderConfig};
pub use prompt::default_system_prompt;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<EaseEntryConfig, Vec<ConfigError>> {
    finish(loader::load_config(), collect_toml_sources)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<EaseEntryConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load configuration from an explicit file and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<EaseEntryConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

fn finish(
    loaded: Result<EaseEntryConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<EaseEntryConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                model = %config.provider.model,
                base_url = %config.booking.base_url,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Read the config files that exist so diagnostics can point into them.
fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let name = if path.is_relative() {
                std::env::current_dir()
                    .map(|d| d.join(&path))
                    .unwrap_or_else(|_| path.clone())
            } else {
                path
            };
            Some((name.display().to_string(), content))
        })
        .collect()
}
