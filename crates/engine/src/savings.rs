//! Interest estimation for savings and cumulative assets.
//!
//! Mirrors what the assets view shows next to each savings item: the
//! expected interest at maturity, the final value, and how far along the
//! term the account is. The math is deliberately simple banker's
//! approximation, not compounding:
//!
//! - term deposit: `principal × rate% × months/12`
//! - cumulative fund: average balance × rate% × days/365, with the balance
//!   growing by the monthly contribution (months ≈ days/30)
//! - dated deposit: `principal × rate% × days/365`

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Amount, EngineError};

/// Kind of interest-bearing asset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// Fixed principal earning interest until maturity.
    #[default]
    Savings,
    /// Principal grows by a monthly contribution.
    Cumulative,
}

/// An interest-bearing savings account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub kind: AssetKind,
    pub principal: Amount,
    /// Annual rate in percent (`6.0` = 6%/year).
    pub interest_rate: f64,
    /// Term length; `None` for open-ended accounts.
    pub term_months: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Monthly deposit for cumulative funds.
    pub auto_contribution: Amount,
}

/// Result of [`SavingsAccount::estimate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterestEstimate {
    pub expected_interest: Amount,
    /// Principal plus expected interest.
    pub final_value: Amount,
    /// Elapsed share of the term, clamped to `0..=100`. 0 when the term is
    /// unknown.
    pub progress_percent: f64,
    pub maturity: Option<NaiveDate>,
}

impl SavingsAccount {
    /// Strict validation for data coming in through the wire boundary.
    ///
    /// [`estimate`] itself stays total and degrades the way the original
    /// view does; this catches entry errors the lenient path would hide.
    ///
    /// [`estimate`]: SavingsAccount::estimate
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(EngineError::InvalidRate(format!(
                "interest rate must be >= 0, got {}",
                self.interest_rate
            )));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(EngineError::InvalidTerm(format!(
                "maturity {end} is before start {start}"
            )));
        }
        if self.term_months == Some(0) {
            return Err(EngineError::InvalidTerm(
                "term must be at least one month".to_string(),
            ));
        }
        Ok(())
    }

    /// Maturity date: the explicit end date, else start + term.
    #[must_use]
    pub fn maturity(&self, today: NaiveDate) -> Option<NaiveDate> {
        if let Some(end) = self.end_date {
            return Some(end);
        }
        let start = self.start_date.unwrap_or(today);
        self.term_months
            .and_then(|months| start.checked_add_months(Months::new(months)))
    }

    /// Estimates interest, final value and term progress as of `today`.
    ///
    /// Total function: accounts with no term and no dates simply estimate
    /// zero interest.
    #[must_use]
    pub fn estimate(&self, today: NaiveDate) -> InterestEstimate {
        let start = self.start_date.unwrap_or(today);
        let maturity = self.maturity(today);
        let principal = self.principal.value();
        let rate = self.interest_rate / 100.0;

        let term = self.term_months.filter(|months| *months > 0);
        let expected = match (term, maturity) {
            (Some(months), _) if self.interest_rate != 0.0 => {
                principal * rate * (f64::from(months) / 12.0)
            }
            (_, Some(mature)) if self.kind == AssetKind::Cumulative => {
                let days = days_between(start, mature);
                let months = (days / 30.0).floor();
                let total_principal = principal + self.auto_contribution.value() * months;
                let average_balance = (principal + total_principal) / 2.0;
                average_balance * rate * (days / 365.0)
            }
            (_, Some(mature)) => {
                let days = days_between(start, mature);
                principal * rate * (days / 365.0)
            }
            _ => 0.0,
        };

        let progress_percent = match maturity {
            Some(mature) => {
                let total = (mature - start).num_days();
                if total > 0 {
                    let elapsed = (today - start).num_days() as f64;
                    (elapsed / total as f64 * 100.0).clamp(0.0, 100.0)
                } else {
                    0.0
                }
            }
            None => 0.0,
        };

        let expected_interest = Amount::from_raw(expected);
        InterestEstimate {
            expected_interest,
            final_value: self.principal + expected_interest,
            progress_percent,
            maturity,
        }
    }
}

fn days_between(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days().unsigned_abs() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn term_deposit() -> SavingsAccount {
        SavingsAccount {
            kind: AssetKind::Savings,
            principal: Amount::from_raw(100_000_000.0),
            interest_rate: 6.0,
            term_months: Some(12),
            start_date: Some(date(2024, 1, 30)),
            end_date: None,
            auto_contribution: Amount::ZERO,
        }
    }

    #[test]
    fn term_deposit_interest_is_months_over_twelve() {
        let estimate = term_deposit().estimate(date(2024, 6, 1));
        // 100M × 6% × 12/12
        assert_eq!(estimate.expected_interest.value().round(), 6_000_000.0);
        assert_eq!(estimate.final_value.value().round(), 106_000_000.0);
        assert_eq!(estimate.maturity, Some(date(2025, 1, 30)));
    }

    #[test]
    fn half_term_deposit() {
        let mut account = term_deposit();
        account.term_months = Some(6);
        let estimate = account.estimate(date(2024, 2, 1));
        assert_eq!(estimate.expected_interest.value().round(), 3_000_000.0);
    }

    #[test]
    fn dated_deposit_uses_day_count() {
        let account = SavingsAccount {
            kind: AssetKind::Savings,
            principal: Amount::from_raw(10_000_000.0),
            interest_rate: 5.0,
            term_months: None,
            start_date: Some(date(2023, 1, 1)),
            end_date: Some(date(2024, 1, 1)),
            auto_contribution: Amount::ZERO,
        };
        let estimate = account.estimate(date(2023, 6, 1));
        // 365 days exactly: 10M × 5% × 365/365
        assert_eq!(estimate.expected_interest.value().round(), 500_000.0);
    }

    #[test]
    fn cumulative_fund_averages_the_growing_balance() {
        let account = SavingsAccount {
            kind: AssetKind::Cumulative,
            principal: Amount::from_raw(10_000_000.0),
            interest_rate: 5.0,
            term_months: None,
            start_date: Some(date(2023, 1, 1)),
            end_date: Some(date(2024, 1, 1)),
            auto_contribution: Amount::from_raw(1_000_000.0),
        };
        let estimate = account.estimate(date(2023, 6, 1));
        // 365 days → 12 whole months of contributions; final principal 22M,
        // average balance 16M, 16M × 5% × 365/365 = 800k.
        assert_eq!(estimate.expected_interest.value().round(), 800_000.0);
        assert_eq!(estimate.final_value.value().round(), 10_800_000.0);
    }

    #[test]
    fn progress_is_clamped() {
        let account = term_deposit();
        let before = account.estimate(date(2023, 12, 1));
        assert_eq!(before.progress_percent, 0.0);
        let after = account.estimate(date(2026, 1, 1));
        assert_eq!(after.progress_percent, 100.0);
        let mid = account.estimate(date(2024, 7, 30));
        assert!(mid.progress_percent > 0.0 && mid.progress_percent < 100.0);
    }

    #[test]
    fn open_ended_account_estimates_zero() {
        let account = SavingsAccount {
            kind: AssetKind::Savings,
            principal: Amount::from_raw(5_000_000.0),
            interest_rate: 4.0,
            ..Default::default()
        };
        let estimate = account.estimate(date(2024, 1, 1));
        assert_eq!(estimate.expected_interest, Amount::ZERO);
        assert_eq!(estimate.final_value, account.principal);
        assert_eq!(estimate.maturity, None);
    }

    #[test]
    fn validate_flags_bad_rates_and_terms() {
        let mut account = term_deposit();
        assert!(account.validate().is_ok());

        account.interest_rate = -1.0;
        assert!(matches!(
            account.validate(),
            Err(EngineError::InvalidRate(_))
        ));

        let mut account = term_deposit();
        account.term_months = Some(0);
        assert!(matches!(
            account.validate(),
            Err(EngineError::InvalidTerm(_))
        ));

        let mut account = term_deposit();
        account.end_date = Some(date(2023, 1, 1));
        assert!(matches!(
            account.validate(),
            Err(EngineError::InvalidTerm(_))
        ));
    }
}
