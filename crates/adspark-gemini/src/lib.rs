// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini provider adapter for AdSpark.
//!
//! Three layers: serde wire types for `generateContent`, a reqwest client
//! with transient-error retry, and a [`GeminiProvider`] implementing the
//! workspace [`ProviderAdapter`](adspark_core::ProviderAdapter) trait with
//! defensive text extraction and the one-shot truncation retry.

pub mod client;
pub mod extract;
pub mod provider;
pub mod types;

pub use client::GeminiClient;
pub use extract::{ExtractedText, NO_CANDIDATES_PLACEHOLDER, extract_text};
pub use provider::GeminiProvider;
