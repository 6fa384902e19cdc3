// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as sampling parameter ranges and positive ceilings.

use crate::diagnostic::ConfigError;
use crate::model::AdsparkConfig;

/// Log levels accepted for `agent.log_level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &AdsparkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate log level
    let level = config.agent.log_level.trim();
    if !VALID_LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{level}` is not one of: {}",
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    // Validate model identifier is not empty
    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    // Validate sampling parameters
    let temperature = config.gemini.temperature;
    if !(0.0..=1.0).contains(&temperature) {
        errors.push(ConfigError::Validation {
            message: format!("gemini.temperature must be within [0, 1], got {temperature}"),
        });
    }

    let top_p = config.gemini.top_p;
    if !(top_p > 0.0 && top_p <= 1.0) {
        errors.push(ConfigError::Validation {
            message: format!("gemini.top_p must be within (0, 1], got {top_p}"),
        });
    }

    if config.gemini.max_output_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.max_output_tokens must be at least 1".to_string(),
        });
    }

    if config.gemini.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.timeout_secs must be at least 1".to_string(),
        });
    }

    // Validate campaign bounds are positive
    if config.campaign.max_field_len == 0 {
        errors.push(ConfigError::Validation {
            message: "campaign.max_field_len must be at least 1".to_string(),
        });
    }

    if config.campaign.max_budget <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "campaign.max_budget must be positive, got {}",
                config.campaign.max_budget
            ),
        });
    }

    if config.campaign.max_cost_per_result <= 0.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "campaign.max_cost_per_result must be positive, got {}",
                config.campaign.max_cost_per_result
            ),
        });
    }

    if config.campaign.caption_char_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "campaign.caption_char_limit must be at least 1".to_string(),
        });
    }

    if config.campaign.default_unit_label.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "campaign.default_unit_label must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AdsparkConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_log_level_fails_validation() {
        let mut config = AdsparkConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))));
    }

    #[test]
    fn temperature_above_one_fails_validation() {
        let mut config = AdsparkConfig::default();
        config.gemini.temperature = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("temperature"))));
    }

    #[test]
    fn zero_top_p_fails_validation() {
        let mut config = AdsparkConfig::default();
        config.gemini.top_p = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("top_p"))));
    }

    #[test]
    fn negative_budget_ceiling_fails_validation() {
        let mut config = AdsparkConfig::default();
        config.campaign.max_budget = -1.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("max_budget"))));
    }

    #[test]
    fn multiple_violations_are_all_collected() {
        let mut config = AdsparkConfig::default();
        config.gemini.temperature = 2.0;
        config.gemini.max_output_tokens = 0;
        config.campaign.max_field_len = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = AdsparkConfig::default();
        config.gemini.temperature = 0.9;
        config.gemini.top_p = 1.0;
        config.campaign.max_field_len = 500;
        config.campaign.max_budget = 50_000.0;
        assert!(validate_config(&config).is_ok());
    }
}
