// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input sanitization and numeric validation.
//!
//! Pure functions; nothing here touches the network or process state. All
//! bounds come from [`CampaignConfig`] rather than hard-coded literals.

use adspark_config::model::CampaignConfig;
use adspark_core::{AdsparkError, ValidationKind};

/// Normalizes a free-text field: trim, collapse newlines to spaces,
/// truncate to `max_len` characters.
pub fn sanitize_text(s: &str, max_len: usize) -> String {
    s.trim()
        .replace(['\r', '\n'], " ")
        .chars()
        .take(max_len)
        .collect()
}

/// Parses and validates the budget / cost-per-result pair.
///
/// Failure order matches the severity ladder: unparseable first, then
/// non-positive, then over the configured ceilings.
pub fn validate_amounts(
    budget_raw: &str,
    cost_per_result_raw: &str,
    limits: &CampaignConfig,
) -> Result<(f64, f64), AdsparkError> {
    let budget = parse_amount(budget_raw);
    let cost_per_result = parse_amount(cost_per_result_raw);

    let (Some(budget), Some(cost_per_result)) = (budget, cost_per_result) else {
        return Err(AdsparkError::validation(
            ValidationKind::NonNumeric,
            "Budget and CPR must be numbers (e.g. 60 and 3).",
        ));
    };

    if budget <= 0.0 || cost_per_result <= 0.0 {
        return Err(AdsparkError::validation(
            ValidationKind::NonPositive,
            "Budget and CPR must be > 0.",
        ));
    }

    if budget > limits.max_budget || cost_per_result > limits.max_cost_per_result {
        return Err(AdsparkError::validation(
            ValidationKind::OutOfRange,
            "Values are too high for this tool. Check and try again.",
        ));
    }

    Ok((budget, cost_per_result))
}

/// Parses a single monetary amount; `None` for anything that is not a
/// finite number (including NaN and infinities, which `f64::from_str`
/// accepts but no form field should produce).
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
