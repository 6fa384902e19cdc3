// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation provider for deterministic testing.
//!
//! `MockProvider` implements `ProviderAdapter` with pre-configured outcomes,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use adspark_core::{
    AdsparkError, GenerationOutcome, GenerationRequest, GenerationStatus, HealthStatus,
    ProviderAdapter,
};

/// A mock provider that returns pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty, a
/// default "mock response" outcome is returned. Every request is recorded
/// so tests can assert how many calls were made and with which prompts.
pub struct MockProvider {
    outcomes: Arc<Mutex<VecDeque<GenerationOutcome>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with successful text outcomes.
    pub fn with_texts(texts: Vec<&str>) -> Self {
        let outcomes = texts
            .into_iter()
            .map(|text| GenerationOutcome {
                text: text.to_string(),
                status: GenerationStatus::Ok,
            })
            .collect();
        Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<GenerationOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add an outcome to the end of the queue.
    pub async fn add_outcome(&self, outcome: GenerationOutcome) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Number of `generate` calls received so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Snapshot of every request received so far, in order.
    pub async fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    /// Pop the next outcome, or return the default.
    async fn next_outcome(&self) -> GenerationOutcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| GenerationOutcome {
                text: "mock response".to_string(),
                status: GenerationStatus::Ok,
            })
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    async fn health_check(&self) -> Result<HealthStatus, AdsparkError> {
        Ok(HealthStatus::Healthy)
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, AdsparkError> {
        self.requests.lock().await.push(request);
        Ok(self.next_outcome().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspark_core::GenerationParams;

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "test-model".to_string(),
            prompt: "prompt".to_string(),
            params: GenerationParams {
                temperature: 0.35,
                top_p: 0.9,
                max_output_tokens: 100,
            },
        }
    }

    #[tokio::test]
    async fn default_outcome_when_queue_empty() {
        let provider = MockProvider::new();
        let outcome = provider.generate(request()).await.unwrap();
        assert_eq!(outcome.text, "mock response");
        assert_eq!(outcome.status, GenerationStatus::Ok);
    }

    #[tokio::test]
    async fn queued_outcomes_returned_in_order() {
        let provider = MockProvider::with_texts(vec!["first", "second"]);

        assert_eq!(provider.generate(request()).await.unwrap().text, "first");
        assert_eq!(provider.generate(request()).await.unwrap().text, "second");
        // Queue exhausted, falls back to default
        assert_eq!(
            provider.generate(request()).await.unwrap().text,
            "mock response"
        );
    }

    #[tokio::test]
    async fn records_every_request() {
        let provider = MockProvider::with_texts(vec!["a", "b"]);
        assert_eq!(provider.call_count().await, 0);

        provider.generate(request()).await.unwrap();
        provider.generate(request()).await.unwrap();

        assert_eq!(provider.call_count().await, 2);
        let recorded = provider.recorded_requests().await;
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].prompt, "prompt");
    }

    #[tokio::test]
    async fn scripted_truncation_outcome() {
        let provider = MockProvider::with_outcomes(vec![GenerationOutcome {
            text: "[No text in response; finish_reason=MAX_TOKENS]".to_string(),
            status: GenerationStatus::Truncated,
        }]);
        let outcome = provider.generate(request()).await.unwrap();
        assert_eq!(outcome.status, GenerationStatus::Truncated);
    }

    #[tokio::test]
    async fn add_outcome_after_construction() {
        let provider = MockProvider::new();
        provider
            .add_outcome(GenerationOutcome {
                text: "dynamic".to_string(),
                status: GenerationStatus::Ok,
            })
            .await;
        assert_eq!(provider.generate(request()).await.unwrap().text, "dynamic");
    }
}
