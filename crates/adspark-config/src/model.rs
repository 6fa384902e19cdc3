// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the AdSpark campaign generator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level AdSpark configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdsparkConfig {
    /// Application identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Gemini API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Campaign input bounds and rendering limits.
    #[serde(default)]
    pub campaign: CampaignConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the application.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "adspark".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires the `GEMINI_API_KEY` or
    /// `GOOGLE_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for generation requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature in `[0, 1]`.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus-sampling probability threshold.
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Bounded timeout for each HTTP request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.35
}

fn default_top_p() -> f64 {
    0.9
}

fn default_max_output_tokens() -> u32 {
    3072
}

fn default_timeout_secs() -> u64 {
    60
}

/// Campaign input bounds and rendering limits.
///
/// These are sanity ceilings for a teaching tool, not domain limits;
/// deployments may raise or lower them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignConfig {
    /// Maximum length of each free-text field after sanitization.
    #[serde(default = "default_max_field_len")]
    pub max_field_len: usize,

    /// Ceiling for the campaign budget.
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,

    /// Ceiling for the cost-per-result value.
    #[serde(default = "default_max_cost_per_result")]
    pub max_cost_per_result: f64,

    /// Character budget for each generated caption.
    #[serde(default = "default_caption_char_limit")]
    pub caption_char_limit: u32,

    /// Unit label used when the user leaves the result name blank.
    #[serde(default = "default_unit_label")]
    pub default_unit_label: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            max_field_len: default_max_field_len(),
            max_budget: default_max_budget(),
            max_cost_per_result: default_max_cost_per_result(),
            caption_char_limit: default_caption_char_limit(),
            default_unit_label: default_unit_label(),
        }
    }
}

fn default_max_field_len() -> usize {
    300
}

fn default_max_budget() -> f64 {
    1_000_000.0
}

fn default_max_cost_per_result() -> f64 {
    100_000.0
}

fn default_caption_char_limit() -> u32 {
    160
}

fn default_unit_label() -> String {
    "results".to_string()
}
