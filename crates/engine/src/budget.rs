//! Spending-versus-limit status for monthly category budgets.

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Warning level for a budget bar.
///
/// Thresholds match the original manager: `warning` from 80% of the limit,
/// `danger` once the limit is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Safe,
    Warning,
    Danger,
}

impl BudgetLevel {
    /// Canonical level string used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Computed status of one category budget for one month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub limit: Amount,
    pub spent: Amount,
    /// Limit minus spent, in đồng. Negative when over budget, so callers
    /// can render "Over by" amounts; signed, unlike the canonical
    /// [`Amount`] domain.
    pub remaining: f64,
    /// Share of the limit spent, in percent. Unclamped: 120% means 20%
    /// over; a zero limit reports 0.
    pub percentage: f64,
    pub level: BudgetLevel,
}

impl BudgetStatus {
    #[must_use]
    pub fn compute(spent: Amount, limit: Amount) -> Self {
        let percentage = if limit.is_zero() {
            0.0
        } else {
            spent.value() / limit.value() * 100.0
        };

        let level = if percentage >= 100.0 {
            BudgetLevel::Danger
        } else if percentage >= 80.0 {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Safe
        };

        Self {
            limit,
            spent,
            remaining: limit.value() - spent.value(),
            percentage,
            level,
        }
    }

    /// `true` once spending reached the limit.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.level == BudgetLevel::Danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(spent: f64, limit: f64) -> BudgetStatus {
        BudgetStatus::compute(Amount::from_raw(spent), Amount::from_raw(limit))
    }

    #[test]
    fn levels_follow_the_80_100_boundaries() {
        assert_eq!(status(790_000.0, 1_000_000.0).level, BudgetLevel::Safe);
        assert_eq!(status(800_000.0, 1_000_000.0).level, BudgetLevel::Warning);
        assert_eq!(status(999_999.0, 1_000_000.0).level, BudgetLevel::Warning);
        assert_eq!(status(1_000_000.0, 1_000_000.0).level, BudgetLevel::Danger);
        assert_eq!(status(1_200_000.0, 1_000_000.0).level, BudgetLevel::Danger);
    }

    #[test]
    fn zero_limit_reports_zero_percent() {
        let s = status(500_000.0, 0.0);
        assert_eq!(s.percentage, 0.0);
        assert_eq!(s.level, BudgetLevel::Safe);
    }

    #[test]
    fn remaining_keeps_its_sign_over_budget() {
        assert_eq!(status(300_000.0, 1_000_000.0).remaining, 700_000.0);
        assert_eq!(status(1_500_000.0, 1_000_000.0).remaining, -500_000.0);
    }

    #[test]
    fn percentage_is_unclamped_over_budget() {
        let s = status(1_200_000.0, 1_000_000.0);
        assert_eq!(s.percentage.round(), 120.0);
    }
}
