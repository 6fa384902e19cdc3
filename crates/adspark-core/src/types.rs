// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the campaign pipeline and provider adapters.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sanitized, validated campaign parameters for a single submission.
///
/// Produced by the input sanitizer; never mutated afterwards. Text fields
/// are trimmed, newline-free, and bounded; the numbers are positive and
/// below their configured ceilings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignInput {
    /// Campaign theme or niche (e.g. "artisan pizzeria").
    pub topic: String,
    /// Target audience description.
    pub audience: String,
    /// Offer or angle being promoted.
    pub offer: String,
    /// Desired tone of voice.
    pub tone: String,
    /// Campaign budget in the user's currency. Always > 0.
    pub budget: f64,
    /// Assumed cost per counted result. Always > 0.
    pub cost_per_result: f64,
}

/// Sampling parameters for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sampling temperature in `[0, 1]`.
    pub temperature: f64,
    /// Nucleus-sampling probability threshold.
    pub top_p: f64,
    /// Maximum output length in tokens.
    pub max_output_tokens: u32,
}

/// A request to a generation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier (e.g. "gemini-2.5-flash").
    pub model: String,
    /// The fully rendered prompt.
    pub prompt: String,
    /// Sampling parameters.
    pub params: GenerationParams,
}

/// Structured signal describing how text extraction went.
///
/// Carried alongside the extracted text so callers branch on this enum
/// rather than pattern-matching rendered diagnostic strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum GenerationStatus {
    /// Usable text was extracted.
    Ok,
    /// The output length limit was hit and no usable text came back.
    Truncated,
    /// No usable text for any other reason (safety block, empty response).
    Empty,
}

/// The result of a generation call after defensive extraction.
///
/// `text` is never empty: when extraction fails, a diagnostic placeholder
/// stands in and `status` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Extracted text, or a diagnostic placeholder.
    pub text: String,
    /// How extraction went.
    pub status: GenerationStatus,
}

impl GenerationOutcome {
    /// Returns true when usable text was extracted.
    pub fn is_ok(&self) -> bool {
        self.status == GenerationStatus::Ok
    }
}

/// Health status reported by provider health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Provider is fully operational.
    Healthy,
    /// Provider is operational but experiencing issues.
    Degraded(String),
    /// Provider is not operational.
    Unhealthy(String),
}
