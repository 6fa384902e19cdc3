// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-submission pipeline: validate, sanitize, prompt, generate,
//! estimate.
//!
//! Strictly linear and synchronous per submission; one logical request is
//! in flight at a time. Every submission is an independent, stateless
//! transaction -- nothing is retained between runs.

use adspark_config::AdsparkConfig;
use adspark_core::{
    AdsparkError, CampaignInput, GenerationParams, GenerationRequest, GenerationStatus,
    ProviderAdapter,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::estimate::Estimate;
use crate::prompt::build_prompt;
use crate::sanitize::{sanitize_text, validate_amounts};

/// Raw form fields as collected by the presentation layer.
///
/// The first six are required; `unit_label` is optional and falls back to
/// the configured default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub topic: String,
    pub audience: String,
    pub offer: String,
    pub tone: String,
    pub budget: String,
    pub cost_per_result: String,
    pub unit_label: String,
}

/// What a submission produced.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// Ideas were generated (possibly degraded) and the estimate computed.
    Report(CampaignReport),
    /// One or more required fields were blank. Nothing was sent upstream;
    /// this is a warning for the user, not an error.
    Incomplete { missing: Vec<&'static str> },
}

/// The rendered result of a successful submission.
#[derive(Debug, Clone)]
pub struct CampaignReport {
    /// Generated ideas text, or a diagnostic placeholder when degraded.
    pub ideas: String,
    /// Whether the ideas text is usable, truncated, or empty.
    pub status: GenerationStatus,
    /// The sanitized input that produced this report.
    pub input: CampaignInput,
    /// Budget ÷ cost-per-result.
    pub estimate: Estimate,
    /// Unit label for the estimate rendering.
    pub unit_label: String,
}

/// Runs one submission through the full pipeline.
///
/// Validation failures halt before any external call is made. Provider
/// errors propagate untouched for the boundary to render as an opaque
/// diagnostic.
pub async fn run_submission(
    provider: &dyn ProviderAdapter,
    config: &AdsparkConfig,
    form: &SubmissionForm,
) -> Result<SubmissionOutcome, AdsparkError> {
    // Re-validate required fields regardless of what the form promised.
    let missing = missing_fields(form);
    if !missing.is_empty() {
        debug!(?missing, "submission incomplete, skipping generation");
        return Ok(SubmissionOutcome::Incomplete { missing });
    }

    let (budget, cost_per_result) =
        validate_amounts(&form.budget, &form.cost_per_result, &config.campaign)?;

    let max_len = config.campaign.max_field_len;
    let input = CampaignInput {
        topic: sanitize_text(&form.topic, max_len),
        audience: sanitize_text(&form.audience, max_len),
        offer: sanitize_text(&form.offer, max_len),
        tone: sanitize_text(&form.tone, max_len),
        budget,
        cost_per_result,
    };

    let request = GenerationRequest {
        model: config.gemini.model.clone(),
        prompt: build_prompt(&input, config.campaign.caption_char_limit),
        params: GenerationParams {
            temperature: config.gemini.temperature,
            top_p: config.gemini.top_p,
            max_output_tokens: config.gemini.max_output_tokens,
        },
    };

    let outcome = provider.generate(request).await?;
    info!(
        provider = provider.name(),
        status = %outcome.status,
        "generation complete"
    );

    let unit_label = match form.unit_label.trim() {
        "" => config.campaign.default_unit_label.clone(),
        label => label.to_string(),
    };

    Ok(SubmissionOutcome::Report(CampaignReport {
        ideas: outcome.text,
        status: outcome.status,
        estimate: Estimate::new(input.budget, input.cost_per_result),
        input,
        unit_label,
    }))
}

/// Names of required fields that are blank after trimming.
fn missing_fields(form: &SubmissionForm) -> Vec<&'static str> {
    [
        ("topic", &form.topic),
        ("audience", &form.audience),
        ("offer", &form.offer),
        ("tone", &form.tone),
        ("budget", &form.budget),
        ("cost per result", &form.cost_per_result),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspark_core::{GenerationOutcome, ValidationKind};
    use adspark_test_utils::MockProvider;

    fn config() -> AdsparkConfig {
        AdsparkConfig::default()
    }

    fn filled_form() -> SubmissionForm {
        SubmissionForm {
            topic: "Executive lunch delivery".into(),
            audience: "Office workers downtown".into(),
            offer: "Daily combo + drink for $9.90".into(),
            tone: "direct, friendly".into(),
            budget: "60".into(),
            cost_per_result: "3".into(),
            unit_label: "clicks".into(),
        }
    }

    #[tokio::test]
    async fn happy_path_produces_report_with_estimate() {
        let provider = MockProvider::with_texts(vec!["1) IDEAS\n1. ..."]);
        let outcome = run_submission(&provider, &config(), &filled_form())
            .await
            .unwrap();

        let SubmissionOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.ideas, "1) IDEAS\n1. ...");
        assert_eq!(report.status, GenerationStatus::Ok);
        assert_eq!(report.estimate.floored(), 20);
        assert_eq!(report.unit_label, "clicks");
        assert_eq!(provider.call_count().await, 1);
    }

    #[tokio::test]
    async fn blank_field_yields_incomplete_and_no_provider_call() {
        let provider = MockProvider::new();
        let mut form = filled_form();
        form.tone = "   ".into();

        let outcome = run_submission(&provider, &config(), &form).await.unwrap();
        let SubmissionOutcome::Incomplete { missing } = outcome else {
            panic!("expected incomplete");
        };
        assert_eq!(missing, vec!["tone"]);
        assert_eq!(provider.call_count().await, 0);
    }

    #[tokio::test]
    async fn all_blank_fields_are_reported_together() {
        let provider = MockProvider::new();
        let form = SubmissionForm::default();

        let outcome = run_submission(&provider, &config(), &form).await.unwrap();
        let SubmissionOutcome::Incomplete { missing } = outcome else {
            panic!("expected incomplete");
        };
        assert_eq!(missing.len(), 6);
        assert_eq!(provider.call_count().await, 0);
    }

    #[tokio::test]
    async fn validation_failure_halts_before_any_provider_call() {
        let provider = MockProvider::new();
        let mut form = filled_form();
        form.budget = "abc".into();

        let err = run_submission(&provider, &config(), &form)
            .await
            .unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::NonNumeric));
        assert_eq!(provider.call_count().await, 0);
    }

    #[tokio::test]
    async fn out_of_range_budget_halts_before_any_provider_call() {
        let provider = MockProvider::new();
        let mut form = filled_form();
        form.budget = "2000000".into();

        let err = run_submission(&provider, &config(), &form)
            .await
            .unwrap_err();
        assert_eq!(err.validation_kind(), Some(ValidationKind::OutOfRange));
        assert_eq!(provider.call_count().await, 0);
    }

    #[tokio::test]
    async fn prompt_carries_sanitized_fields_and_config_params() {
        let provider = MockProvider::with_texts(vec!["ok"]);
        let mut form = filled_form();
        form.topic = "  line\nbroken   topic  ".into();

        run_submission(&provider, &config(), &form).await.unwrap();

        let requests = provider.recorded_requests().await;
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.prompt.contains("Topic/Niche: line broken   topic"));
        assert!(!request.prompt.contains("line\nbroken"));
        assert_eq!(request.model, "gemini-2.5-flash");
        assert_eq!(request.params.temperature, 0.35);
        assert_eq!(request.params.top_p, 0.9);
        assert_eq!(request.params.max_output_tokens, 3072);
    }

    #[tokio::test]
    async fn truncated_outcome_surfaces_as_degraded_report() {
        let provider = MockProvider::with_outcomes(vec![GenerationOutcome {
            text: "[No text in response; finish_reason=MAX_TOKENS]".into(),
            status: GenerationStatus::Truncated,
        }]);

        let outcome = run_submission(&provider, &config(), &filled_form())
            .await
            .unwrap();
        let SubmissionOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.status, GenerationStatus::Truncated);
        assert!(report.ideas.starts_with("[No text"));
        // The estimate is still computed for a degraded generation.
        assert_eq!(report.estimate.floored(), 20);
    }

    #[tokio::test]
    async fn blank_unit_label_falls_back_to_configured_default() {
        let provider = MockProvider::with_texts(vec!["ok"]);
        let mut form = filled_form();
        form.unit_label = "  ".into();

        let outcome = run_submission(&provider, &config(), &form).await.unwrap();
        let SubmissionOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.unit_label, "results");
    }
}
