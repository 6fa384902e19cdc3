// SPDX-FileCopyrightText: 2026 AdSpark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reach estimate: budget divided by cost-per-result.
//!
//! Purely arithmetic. Upstream validation guarantees both values are
//! positive and finite, so no error path exists here.

use serde::{Deserialize, Serialize};

/// A deterministic reach estimate for a validated submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Validated campaign budget. Always > 0.
    pub budget: f64,
    /// Validated cost per result. Always > 0.
    pub cost_per_result: f64,
}

impl Estimate {
    /// Builds an estimate from validated amounts.
    pub fn new(budget: f64, cost_per_result: f64) -> Self {
        debug_assert!(budget > 0.0 && cost_per_result > 0.0);
        Self {
            budget,
            cost_per_result,
        }
    }

    /// The exact ratio `budget / cost_per_result`.
    pub fn expected(&self) -> f64 {
        self.budget / self.cost_per_result
    }

    /// The ratio floored to a whole count of results.
    pub fn floored(&self) -> u64 {
        self.expected().floor() as u64
    }

    /// Renders the estimate line shown to the user.
    pub fn render(&self, unit_label: &str) -> String {
        format!(
            "Results ~ budget / CPR -> {}/{} = {} {}",
            self.budget,
            self.cost_per_result,
            self.floored(),
            unit_label
        )
    }
}
