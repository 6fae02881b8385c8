// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order, later layers winning: compiled defaults,
//! `/etc/easeentry/easeentry.toml`, `~/.config/easeentry/easeentry.toml`,
//! `./easeentry.toml`, then `EASEENTRY_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::EaseEntryConfig;

/// File name searched for in every config directory.
pub const CONFIG_FILE_NAME: &str = "easeentry.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "EASEENTRY_";

/// Section prefixes understood by the environment provider.
const ENV_SECTIONS: &[&str] = &["agent", "provider", "booking"];

/// Candidate config file paths, lowest precedence first.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/easeentry").join(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("easeentry").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Build the full Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(EaseEntryConfig::default()));
    for path in config_paths() {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(env_provider())
}

/// Load configuration from the standard hierarchy with env overrides.
pub fn load_config() -> Result<EaseEntryConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string on top of the defaults only.
pub fn load_config_from_str(toml_content: &str) -> Result<EaseEntryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EaseEntryConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path, with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<EaseEntryConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EaseEntryConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider mapping `EASEENTRY_<SECTION>_<KEY>` to `section.key`.
///
/// Figment hands over the prefix-stripped name as written, so it is
/// lowercased before mapping. Only the first underscore after the section
/// name becomes a dot: `EASEENTRY_PROVIDER_MAX_TOKENS` maps to
/// `provider.max_tokens`.
pub fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env var name to a dotted config path.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_split_on_section_only() {
        assert_eq!(map_env_key("provider_max_tokens"), "provider.max_tokens");
        assert_eq!(map_env_key("agent_log_level"), "agent.log_level");
        assert_eq!(
            map_env_key("booking_email_validation"),
            "booking.email_validation"
        );
    }

    #[test]
    fn env_keys_are_matched_case_insensitively() {
        assert_eq!(map_env_key("PROVIDER_MODEL"), "provider.model");
        assert_eq!(map_env_key("Booking_Base_URL"), "booking.base_url");
        assert_eq!(map_env_key("AGENT_LOG_LEVEL"), "agent.log_level");
    }

    #[test]
    fn unknown_sections_pass_through() {
        assert_eq!(map_env_key("storage_path"), "storage_path");
        // "agents" is not the "agent" section
        assert_eq!(map_env_key("agents_name"), "agents_name");
    }

    #[test]
    fn local_file_has_highest_file_precedence() {
        let paths = config_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from("/etc/easeentry/easeentry.toml")));
        assert_eq!(paths.last(), Some(&PathBuf::from(CONFIG_FILE_NAME)));
    }
}
