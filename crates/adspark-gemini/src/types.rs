// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generative Language API request/response types.
//!
//! Mirrors the REST shape of `models/{model}:generateContent`. Response
//! types are deliberately permissive -- every field that the service has
//! been observed to omit is an `Option` or defaults to empty, so a
//! malformed-but-parseable body never fails deserialization.

use adspark_core::GenerationParams;
use serde::{Deserialize, Serialize};
use strum::Display;

// --- Request types ---

/// A request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; a single user turn for this application.
    pub contents: Vec<Content>,

    /// Sampling configuration.
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Builds a single-turn request from a prompt and sampling parameters.
    pub fn from_prompt(prompt: &str, params: &GenerationParams) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_p: params.top_p,
                max_output_tokens: params.max_output_tokens,
            },
        }
    }
}

/// Sampling configuration for a generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus-sampling probability threshold.
    pub top_p: f64,
    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
}

/// A content block: a role plus an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" on requests, "model" on responses. The service omits it in
    /// some response shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part. Only text parts are meaningful here; other part
/// kinds deserialize with `text: None` and are skipped during extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text payload, when this is a text part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// --- Response types ---

/// A full response from the `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions. May be empty (e.g. prompt-level block).
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single candidate completion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content. Absent when generation produced nothing.
    pub content: Option<Content>,

    /// Why generation stopped. Absent on some error shapes.
    pub finish_reason: Option<FinishReason>,
}

/// Reason a candidate stopped generating, as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// Natural stop point or stop sequence.
    Stop,
    /// The configured output token ceiling was reached.
    MaxTokens,
    /// Flagged by safety filters.
    Safety,
    /// Flagged for recitation of training data.
    Recitation,
    /// Any reason this client does not model explicitly.
    #[serde(other)]
    Other,
}

// --- Error types ---

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// HTTP-style numeric code.
    #[serde(default)]
    pub code: u16,
    /// Human-readable error message.
    pub message: String,
    /// Symbolic status (e.g. "INVALID_ARGUMENT").
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerationParams {
        GenerationParams {
            temperature: 0.35,
            top_p: 0.9,
            max_output_tokens: 3072,
        }
    }

    #[test]
    fn serialize_request_uses_camel_case_wire_names() {
        let req = GenerateContentRequest::from_prompt("Generate ideas", &params());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Generate ideas");
        assert_eq!(json["generationConfig"]["temperature"], 0.35);
        assert_eq!(json["generationConfig"]["topP"], 0.9);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 3072);
    }

    #[test]
    fn deserialize_response_with_text_candidate() {
        let json = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "1) IDEAS"}]},
                "finishReason": "STOP"
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates.len(), 1);
        let cand = &resp.candidates[0];
        assert_eq!(cand.finish_reason, Some(FinishReason::Stop));
        assert_eq!(
            cand.content.as_ref().unwrap().parts[0].text.as_deref(),
            Some("1) IDEAS")
        );
    }

    #[test]
    fn deserialize_response_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.candidates.is_empty());
    }

    #[test]
    fn deserialize_candidate_without_content() {
        let json = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let cand = &resp.candidates[0];
        assert!(cand.content.is_none());
        assert_eq!(cand.finish_reason, Some(FinishReason::MaxTokens));
    }

    #[test]
    fn unknown_finish_reason_maps_to_other() {
        let json = r#"{"candidates": [{"finishReason": "SPII"}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates[0].finish_reason, Some(FinishReason::Other));
    }

    #[test]
    fn finish_reason_displays_wire_form() {
        assert_eq!(FinishReason::MaxTokens.to_string(), "MAX_TOKENS");
        assert_eq!(FinishReason::Stop.to_string(), "STOP");
        assert_eq!(FinishReason::Safety.to_string(), "SAFETY");
    }

    #[test]
    fn non_text_parts_deserialize_with_none_text() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "x"}}]},
                "finishReason": "STOP"
            }]
        }"#;
        // Unknown part fields are ignored; the part simply has no text.
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let cand = &resp.candidates[0];
        assert!(cand.content.as_ref().unwrap().parts[0].text.is_none());
    }

    #[test]
    fn deserialize_api_error_response() {
        let json = r#"{
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        }"#;
        let err: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.code, 400);
        assert_eq!(err.error.status, "INVALID_ARGUMENT");
        assert!(err.error.message.contains("API key"));
    }
}
