// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The campaign prompt template.
//!
//! The output-format section is a contract: the display layer renders the
//! returned text verbatim, so the template must stay stable across calls.
//! Bump [`PROMPT_VERSION`] on any wording change that alters the output
//! shape.

use adspark_core::CampaignInput;

/// Version of the prompt template below.
pub const PROMPT_VERSION: u32 = 2;

/// Fixed template; `{placeholders}` are substituted by [`build_prompt`].
const PROMPT_TEMPLATE: &str = "\
You are a didactic marketing assistant.

Task: generate 3 post IDEAS and 2 short CAPTIONS per IDEA.
Rules:
- Never promise guaranteed results; be clear and specific; no jargon.
- Each IDEA: short title + angle (1 line).
- Each CAPTION: at most {caption_limit} characters, with a simple CTA.
- Keep the TOTAL output concise (around 250-300 words).

Context:
- Topic/Niche: {topic}
- Audience: {audience}
- Offer/Angle: {offer}
- Tone of voice: {tone}

Output format (exact):
1) IDEAS
1. ...
2. ...
3. ...
2) CAPTIONS
For IDEA 1:
- ...
- ...
For IDEA 2:
- ...
- ...
For IDEA 3:
- ...
- ...
";

/// Fills the template with sanitized campaign fields.
///
/// Pure substitution; no retries, no randomness. The input is expected to
/// be sanitized already -- this function adds no escaping of its own.
pub fn build_prompt(input: &CampaignInput, caption_char_limit: u32) -> String {
    PROMPT_TEMPLATE
        .replace("{caption_limit}", &caption_char_limit.to_string())
        .replace("{topic}", &input.topic)
        .replace("{audience}", &input.audience)
        .replace("{offer}", &input.offer)
        .replace("{tone}", &input.tone)
}
