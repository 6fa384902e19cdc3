// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for generation backends.

use async_trait::async_trait;

use crate::error::AdsparkError;
use crate::types::{GenerationOutcome, GenerationRequest, HealthStatus};

/// Adapter for text-generation provider integrations.
///
/// Implementations own the API credential and the recovery policy for
/// truncated output: when the primary attempt hits the output length
/// limit without yielding usable text, `generate` issues at most one
/// follow-up with a shortening instruction appended to the prompt and
/// returns the last attempt's outcome.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Performs a health check and returns the provider's current status.
    async fn health_check(&self) -> Result<HealthStatus, AdsparkError>;

    /// Sends a generation request and returns the extracted outcome.
    ///
    /// Never fails on a malformed-but-parseable response body; extraction
    /// degrades to a diagnostic placeholder instead. Errors are reserved
    /// for transport failures and API-level rejections.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, AdsparkError>;
}
