// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test fixtures and mock adapters for the AdSpark workspace.

pub mod mock_provider;

pub use mock_provider::MockProvider;
