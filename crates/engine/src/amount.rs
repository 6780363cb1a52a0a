use std::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Canonical money amount in base units (đồng).
///
/// Use this type for **all** monetary values in the engine (transaction
/// amounts, budget limits, savings principals). The inner value is kept
/// normalized:
/// - always finite (NaN and ±∞ become 0)
/// - always ≥ 0 (negatives are clamped to 0)
///
/// Amounts below 1 đồng do occur transiently (decimal shorthand like
/// `"1,5tr"` goes through fractional intermediates), so the representation
/// stays floating point rather than integer minor units.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount = Amount::from_raw(50_000.0);
/// assert_eq!(amount.value(), 50_000.0);
/// assert_eq!(amount.to_display(), "50.000");
/// assert_eq!(Amount::from_raw(f64::NAN), Amount::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Creates an amount, normalizing any float into the canonical domain.
    ///
    /// NaN and infinities become 0; negative values are clamped to 0.
    #[must_use]
    pub fn from_raw(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Strict constructor for validation boundaries.
    ///
    /// Unlike [`from_raw`], a non-finite or negative input is reported
    /// instead of silently normalized.
    ///
    /// [`from_raw`]: Amount::from_raw
    pub fn try_new(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::InvalidAmount(
                "amount must be a finite number".to_string(),
            ));
        }
        if value < 0.0 {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be >= 0, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw value in đồng.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Renders the amount as a plain numeric string with no grouping.
    ///
    /// This is the *editing* representation used while an input field has
    /// focus: `1_000_000` → `"1000000"`, `1_500_000.5` → `"1500000.5"`.
    #[must_use]
    pub fn to_plain(self) -> String {
        if self.0.fract() == 0.0 && self.0 <= i64::MAX as f64 {
            format!("{}", self.0 as i64)
        } else {
            // f64 Display already picks the shortest round-trip form.
            format!("{}", self.0)
        }
    }

    /// Renders the amount in the vi-VN display convention.
    ///
    /// Integer digits are grouped with `.`; a fractional part (capped at 3
    /// digits, trailing zeros trimmed) follows after `,`. Whole numbers get
    /// no decimal places: `1_000_000` → `"1.000.000"`, `0` → `"0"`,
    /// `1500.5` → `"1.500,5"`.
    #[must_use]
    pub fn to_display(self) -> String {
        let mut int_part = self.0.trunc() as i128;
        let mut millis = ((self.0 - self.0.trunc()) * 1000.0).round() as i128;
        if millis >= 1000 {
            int_part += 1;
            millis -= 1000;
        }

        let grouped = group_thousands(int_part);
        if millis == 0 {
            return grouped;
        }

        let mut frac = format!("{millis:03}");
        while frac.ends_with('0') {
            frac.pop();
        }
        format!("{grouped},{frac}")
    }
}

/// Groups a non-negative integer with `.` every three digits.
fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let head = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - head) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::from_raw(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount::from_raw(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sub for Amount {
    type Output = Amount;

    /// Saturating at 0: the canonical domain has no negative amounts.
    fn sub(self, rhs: Amount) -> Self::Output {
        Amount::from_raw(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        *self = *self - rhs;
    }
}
