// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the AdSpark campaign generator.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the AdSpark workspace. Provider adapters
//! implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{AdsparkError, ValidationKind};
pub use traits::ProviderAdapter;
pub use types::{
    CampaignInput, GenerationOutcome, GenerationParams, GenerationRequest, GenerationStatus,
    HealthStatus,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adspark_error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _config = AdsparkError::Config("test".into());
        let _validation = AdsparkError::Validation {
            kind: ValidationKind::NonNumeric,
            message: "test".into(),
        };
        let _provider = AdsparkError::Provider {
            message: "test".into(),
            source: None,
        };
        let _timeout = AdsparkError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = AdsparkError::Internal("test".into());
    }

    #[test]
    fn validation_error_displays_bare_message() {
        // Validation messages are user-facing; no "error:" prefix noise.
        let err = AdsparkError::validation(ValidationKind::NonPositive, "Budget must be > 0.");
        assert_eq!(err.to_string(), "Budget must be > 0.");
        assert_eq!(err.validation_kind(), Some(ValidationKind::NonPositive));
    }

    #[test]
    fn validation_kind_round_trips_through_strings() {
        use std::str::FromStr;

        let kinds = [
            ValidationKind::NonNumeric,
            ValidationKind::NonPositive,
            ValidationKind::OutOfRange,
        ];
        for kind in kinds {
            let s = kind.to_string();
            let parsed = ValidationKind::from_str(&s).expect("should parse back");
            assert_eq!(kind, parsed);
        }
        assert_eq!(ValidationKind::NonNumeric.to_string(), "non-numeric");
        assert_eq!(ValidationKind::OutOfRange.to_string(), "out-of-range");
    }

    #[test]
    fn non_validation_errors_have_no_kind() {
        assert_eq!(
            AdsparkError::Config("missing key".into()).validation_kind(),
            None
        );
    }

    #[test]
    fn generation_status_serialization() {
        let status = GenerationStatus::Truncated;
        let json = serde_json::to_string(&status).expect("should serialize");
        let parsed: GenerationStatus = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(status, parsed);
    }

    #[test]
    fn generation_outcome_ok_flag() {
        let ok = GenerationOutcome {
            text: "ideas".into(),
            status: GenerationStatus::Ok,
        };
        let truncated = GenerationOutcome {
            text: "[No text in response; finish_reason=MAX_TOKENS]".into(),
            status: GenerationStatus::Truncated,
        };
        assert!(ok.is_ok());
        assert!(!truncated.is_ok());
    }

    #[test]
    fn health_status_variants() {
        let healthy = HealthStatus::Healthy;
        let degraded = HealthStatus::Degraded("slow".into());
        let unhealthy = HealthStatus::Unhealthy("down".into());

        assert_eq!(healthy, HealthStatus::Healthy);
        assert_ne!(degraded, healthy);
        assert_ne!(unhealthy, healthy);
    }
}
