// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the AdSpark campaign generator.

use strum::{Display, EnumString};
use thiserror::Error;

/// The primary error type used across the AdSpark workspace.
#[derive(Debug, Error)]
pub enum AdsparkError {
    /// Configuration errors (invalid TOML, missing API key, type mismatches).
    /// Fatal at startup; never raised per submission.
    #[error("configuration error: {0}")]
    Config(String),

    /// User input failed validation. Recoverable; rendered as a short
    /// corrective message and never sent upstream.
    #[error("{message}")]
    Validation {
        kind: ValidationKind,
        message: String,
    },

    /// Generation provider errors (HTTP failure, API error, malformed body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote call exceeded its bounded timeout.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdsparkError {
    /// Builds a [`AdsparkError::Validation`] with the given kind.
    pub fn validation(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
        }
    }

    /// Returns the validation kind when this is a validation error.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Classifies why a submitted value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ValidationKind {
    /// The value could not be parsed as a number.
    NonNumeric,
    /// The parsed number was zero or negative.
    NonPositive,
    /// The parsed number exceeded its configured ceiling.
    OutOfRange,
}
