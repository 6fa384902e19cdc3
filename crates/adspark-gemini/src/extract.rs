// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Defensive text extraction from `generateContent` responses.
//!
//! The service returns a number of shapes: a normal candidate with text
//! parts, a candidate with no content (safety block, token-limit hit), or
//! no candidates at all. Extraction is total -- every shape resolves to an
//! [`ExtractedText`] variant, never an error, and rendering always yields
//! non-empty text (diagnostic placeholders stand in when nothing usable
//! came back).

use adspark_core::{GenerationOutcome, GenerationStatus};

use crate::types::{FinishReason, GenerateContentResponse};

/// Placeholder rendered when the response carried no candidates (or a
/// candidate with neither text nor a finish reason).
pub const NO_CANDIDATES_PLACEHOLDER: &str = "[No text and no candidates]";

/// Where the extracted text came from, or why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    /// A single text fragment from the first candidate.
    Direct(String),
    /// Multiple text fragments from the first candidate, newline-joined
    /// in wire order.
    Parts(String),
    /// No usable text; the candidate did report why it stopped.
    Diagnostic(FinishReason),
    /// No candidates, or a candidate with neither text nor a finish reason.
    NoContent,
}

impl ExtractedText {
    /// Maps the extraction result to the structured status callers branch on.
    pub fn status(&self) -> GenerationStatus {
        match self {
            Self::Direct(_) | Self::Parts(_) => GenerationStatus::Ok,
            Self::Diagnostic(FinishReason::MaxTokens) => GenerationStatus::Truncated,
            Self::Diagnostic(_) | Self::NoContent => GenerationStatus::Empty,
        }
    }

    /// Renders to displayable text and pairs it with the status.
    pub fn into_outcome(self) -> GenerationOutcome {
        let status = self.status();
        let text = match self {
            Self::Direct(text) | Self::Parts(text) => text,
            Self::Diagnostic(reason) => {
                format!("[No text in response; finish_reason={reason}]")
            }
            Self::NoContent => NO_CANDIDATES_PLACEHOLDER.to_string(),
        };
        GenerationOutcome { text, status }
    }
}

/// Extracts text from a response, handling every shape without panicking.
///
/// Precedence: single text fragment from the first candidate; otherwise all
/// non-empty fragments newline-joined in order; otherwise a diagnostic
/// carrying the candidate's finish reason; otherwise [`ExtractedText::NoContent`].
pub fn extract_text(response: &GenerateContentResponse) -> ExtractedText {
    let Some(candidate) = response.candidates.first() else {
        return ExtractedText::NoContent;
    };

    let fragments: Vec<&str> = candidate
        .content
        .as_ref()
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .filter(|text| !text.trim().is_empty())
                .collect()
        })
        .unwrap_or_default();

    match fragments.len() {
        0 => match candidate.finish_reason {
            Some(reason) => ExtractedText::Diagnostic(reason),
            None => ExtractedText::NoContent,
        },
        1 => ExtractedText::Direct(fragments[0].trim().to_string()),
        _ => ExtractedText::Parts(fragments.join("\n").trim().to_string()),
    }
}
