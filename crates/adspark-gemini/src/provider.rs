// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`ProviderAdapter`] implementation backed by the Gemini API.
//!
//! Owns the API credential and the one-shot truncation retry: when the
//! primary attempt hits the output token ceiling without yielding usable
//! text, a single follow-up is sent with a shortening instruction appended
//! to the prompt, and the follow-up's outcome is returned either way.

use std::time::Duration;

use adspark_config::model::GeminiConfig;
use adspark_core::{
    AdsparkError, GenerationOutcome, GenerationRequest, GenerationStatus, HealthStatus,
    ProviderAdapter,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::GeminiClient;
use crate::extract::extract_text;
use crate::types::GenerateContentRequest;

/// Environment variables consulted when the config carries no API key.
const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Instruction appended to the prompt on the truncation retry.
const SHORTEN_INSTRUCTION: &str =
    "\n\nAnswer even more briefly. Prefer single-line lists.";

/// Gemini-backed generation provider.
#[derive(Debug)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Creates a provider from validated configuration.
    ///
    /// The API key comes from `gemini.api_key`, falling back to the
    /// `GEMINI_API_KEY` then `GOOGLE_API_KEY` environment variables.
    /// A missing key is a fatal configuration error; the caller is
    /// expected to refuse startup.
    pub fn new(config: &GeminiConfig) -> Result<Self, AdsparkError> {
        let api_key = resolve_api_key(config)?;
        let client = GeminiClient::new(&api_key, Duration::from_secs(config.timeout_secs))?;
        Ok(Self { client })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    fn with_base_url(mut self, url: String) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }
}

/// Resolves the API key from config, then the environment.
fn resolve_api_key(config: &GeminiConfig) -> Result<String, AdsparkError> {
    if let Some(key) = config.api_key.as_deref()
        && !key.trim().is_empty()
    {
        return Ok(key.trim().to_string());
    }

    for var in API_KEY_ENV_VARS {
        if let Ok(key) = std::env::var(var)
            && !key.trim().is_empty()
        {
            return Ok(key.trim().to_string());
        }
    }

    Err(AdsparkError::Config(format!(
        "Gemini API key required. Set gemini.api_key in adspark.toml or one of: {}",
        API_KEY_ENV_VARS.join(", ")
    )))
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, AdsparkError> {
        // Construction already verified a credential exists.
        Ok(HealthStatus::Healthy)
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, AdsparkError> {
        let body = GenerateContentRequest::from_prompt(&request.prompt, &request.params);
        let response = self.client.generate_content(&request.model, &body).await?;
        let extracted = extract_text(&response);

        if extracted.status() != GenerationStatus::Truncated {
            return Ok(extracted.into_outcome());
        }

        // Token ceiling hit with nothing usable. One shortened follow-up;
        // whatever it yields is the final answer.
        warn!(model = %request.model, "output token ceiling hit, retrying with shortening instruction");
        let short_prompt = format!("{}{SHORTEN_INSTRUCTION}", request.prompt);
        let retry_body = GenerateContentRequest::from_prompt(&short_prompt, &request.params);
        let retry_response = self
            .client
            .generate_content(&request.model, &retry_body)
            .await?;
        let retry_extracted = extract_text(&retry_response);
        debug!(status = %retry_extracted.status(), "truncation retry complete");
        Ok(retry_extracted.into_outcome())
    }
}
