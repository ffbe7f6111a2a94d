//! Profitability snapshot and delta types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ProjectId, SnapshotId};

/// A point-in-time profitability measurement for a project.
///
/// Append-only: snapshots are never updated or deleted. A snapshot with
/// `baseline_id == None` *is* a baseline; all later snapshots in the same
/// tracking session reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilitySnapshot {
    pub id: SnapshotId,
    pub project_id: ProjectId,
    pub baseline_id: Option<SnapshotId>,
    pub total_profitability: f64,
    pub triggered_by_agent: Option<String>,
    pub triggered_by_action: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProfitabilitySnapshot {
    /// True iff this snapshot is a baseline.
    pub fn is_baseline(&self) -> bool {
        self.baseline_id.is_none()
    }
}

/// Signed comparison of a snapshot against its baseline.
///
/// Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityDelta {
    pub current_profitability: f64,
    pub baseline_profitability: f64,
    /// `current − baseline`.
    pub change_amount: f64,
    /// Percentage change relative to `|baseline|`; `None` when the baseline
    /// is exactly zero.
    pub change_percentage: Option<f64>,
    /// Strictly positive change only; zero is not an improvement.
    pub is_improvement: bool,
}

impl ProfitabilityDelta {
    /// Compare a current profitability figure against a baseline figure.
    pub fn between(current: f64, baseline: f64) -> Self {
        let change_amount = current - baseline;
        let change_percentage = if baseline != 0.0 {
            Some(change_amount / baseline.abs() * 100.0)
        } else {
            None
        };
        Self {
            current_profitability: current,
            baseline_profitability: baseline,
            change_amount,
            change_percentage,
            is_improvement: change_amount > 0.0,
        }
    }

    /// Human-readable description of the change.
    pub fn describe(&self) -> String {
        if self.change_amount == 0.0 {
            return "No change in profitability".to_string();
        }
        let direction = if self.is_improvement {
            "improved"
        } else {
            "declined"
        };
        let amount = self.change_amount.abs();
        match self.change_percentage {
            Some(pct) => format!("Profitability has {direction} by ${amount:.2} ({pct:.1}%)"),
            None => format!("Profitability has {direction} by ${amount:.2}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProfitabilityDelta;

    #[test]
    fn test_delta_decline() {
        let delta = ProfitabilityDelta::between(97_000.0, 100_000.0);
        assert_eq!(delta.change_amount, -3_000.0);
        assert!((delta.change_percentage.unwrap() + 3.0).abs() < 1e-9);
        assert!(!delta.is_improvement);
    }

    #[test]
    fn test_delta_improvement() {
        let delta = ProfitabilityDelta::between(110_000.0, 100_000.0);
        assert_eq!(delta.change_amount, 10_000.0);
        assert!((delta.change_percentage.unwrap() - 10.0).abs() < 1e-9);
        assert!(delta.is_improvement);
    }

    #[test]
    fn test_delta_zero_change_is_not_improvement() {
        let delta = ProfitabilityDelta::between(100.0, 100.0);
        assert_eq!(delta.change_amount, 0.0);
        assert!(!delta.is_improvement);
        assert_eq!(delta.describe(), "No change in profitability");
    }

    #[test]
    fn test_delta_zero_baseline_has_no_percentage() {
        let delta = ProfitabilityDelta::between(500.0, 0.0);
        assert_eq!(delta.change_amount, 500.0);
        assert!(delta.change_percentage.is_none());
        assert!(delta.is_improvement);
    }

    #[test]
    fn test_delta_negative_baseline_uses_absolute_denominator() {
        let delta = ProfitabilityDelta::between(-50.0, -100.0);
        assert_eq!(delta.change_amount, 50.0);
        assert!((delta.change_percentage.unwrap() - 50.0).abs() < 1e-9);
        assert!(delta.is_improvement);
    }

    #[test]
    fn test_change_sign_matches_improvement_flag() {
        for (current, baseline) in [(1.0, 0.0), (0.0, 1.0), (5.0, 5.0), (-2.0, -8.0)] {
            let delta = ProfitabilityDelta::between(current, baseline);
            assert_eq!(delta.is_improvement, delta.change_amount > 0.0);
        }
    }
}
