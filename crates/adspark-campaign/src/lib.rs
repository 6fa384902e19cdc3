// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Campaign pipeline for AdSpark: input sanitization, prompt building,
//! reach estimation, and the per-submission orchestration.

pub mod estimate;
pub mod pipeline;
pub mod prompt;
pub mod sanitize;

pub use estimate::Estimate;
pub use pipeline::{CampaignReport, SubmissionForm, SubmissionOutcome, run_submission};
pub use prompt::{PROMPT_VERSION, build_prompt};
pub use sanitize::{sanitize_text, validate_amounts};
