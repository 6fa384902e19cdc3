// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./adspark.toml` > `~/.config/adspark/adspark.toml`
//! > `/etc/adspark/adspark.toml` with environment variable overrides via the
//! `ADSPARK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::AdsparkConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/adspark/adspark.toml` (system-wide)
/// 3. `~/.config/adspark/adspark.toml` (user XDG config)
/// 4. `./adspark.toml` (local directory)
/// 5. `ADSPARK_*` environment variables
pub fn load_config() -> Result<AdsparkConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AdsparkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AdsparkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AdsparkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AdsparkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(AdsparkConfig::default()))
        .merge(Toml::file("/etc/adspark/adspark.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("adspark/adspark.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("adspark.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `ADSPARK_GEMINI_API_KEY` must
/// map to `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("ADSPARK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: ADSPARK_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("campaign_", "campaign.", 1);
        mapped.into()
    })
}
