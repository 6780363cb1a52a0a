//! VND numeric shorthand codec.
//!
//! Users type amounts the way they say them: `"50k"`, `"1,5tr"`, `"2tỷ"`,
//! or fully separated like `"1.000.000"`. The codec turns any of those into
//! a canonical [`Amount`] and renders amounts back into the vi-VN display
//! convention (dot-grouped thousands, comma decimals, no suffix).
//!
//! Every operation here is a total function: empty, whitespace-only and
//! garbage input all resolve to [`Amount::ZERO`], never an error.

use unicode_normalization::UnicodeNormalization;

use crate::Amount;

/// Raw entries below this are assumed to be typed in thousands.
///
/// No real transaction is under 10.000₫, so a bare `"50"` means 50.000₫.
/// Do not touch without product confirmation; the value is load-bearing for
/// every stored amount entered through the quick path.
const FULL_AMOUNT_THRESHOLD: f64 = 10_000.0;

/// Magnitude suffixes, longest spelling first within each tier.
///
/// `triệu` must be checked before `tr` (shared prefix); the tier order
/// itself (billions, millions, thousands) means a longer suffix can never
/// be shadowed by a shorter one from another tier.
const SUFFIXES: &[(&str, f64)] = &[
    ("tỷ", 1e9),
    ("triệu", 1e6),
    ("tr", 1e6),
    ("m", 1e6),
    ("ngàn", 1e3),
    ("nghìn", 1e3),
    ("k", 1e3),
];

/// Lowercases, NFC-folds and strips all whitespace.
///
/// Vietnamese keyboards disagree on whether `ỷ` arrives precomposed, so
/// suffix matching runs on the NFC form.
fn normalize(text: &str) -> String {
    text.nfc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Splits a normalized string into its numeric body and tier multiplier.
fn strip_suffix(normalized: &str) -> (&str, f64) {
    for (suffix, multiplier) in SUFFIXES {
        if let Some(body) = normalized.strip_suffix(suffix) {
            return (body, *multiplier);
        }
    }
    (normalized, 1.0)
}

/// Parses user-typed shorthand into a canonical amount.
///
/// Dots are thousands separators and are removed; a comma is the decimal
/// separator. A trailing magnitude suffix scales the result:
/// `tỷ` ×1e9, `triệu`/`tr`/`m` ×1e6, `ngàn`/`nghìn`/`k` ×1e3.
///
/// ```rust
/// use engine::{parse_amount, Amount};
///
/// assert_eq!(parse_amount("50k"), Amount::from_raw(50_000.0));
/// assert_eq!(parse_amount("1,5tr"), Amount::from_raw(1_500_000.0));
/// assert_eq!(parse_amount("1.000.000"), Amount::from_raw(1_000_000.0));
/// assert_eq!(parse_amount("abc"), Amount::ZERO);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> Amount {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Amount::ZERO;
    }

    let (body, multiplier) = strip_suffix(&normalized);
    let clean = body.replace('.', "").replace(',', ".");
    match clean.parse::<f64>() {
        Ok(value) => Amount::from_raw(value * multiplier),
        Err(_) => Amount::ZERO,
    }
}

/// Commit-time resolution of a raw typed value (the full-amount heuristic).
///
/// If the text carries a separator or a magnitude suffix the user was
/// explicit and [`parse_amount`] decides alone. A bare number under 10.000
/// is read as thousands of đồng, so `"50"` commits as 50.000₫ while
/// `"50000"` stays 50.000₫.
///
/// Callers apply this on blur/submit only, never while the user is typing.
#[must_use]
pub fn resolve_amount(text: &str) -> Amount {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Amount::ZERO;
    }

    let explicit = normalized.contains('.')
        || normalized.contains(',')
        || has_known_suffix(&normalized);
    if explicit {
        return parse_amount(&normalized);
    }

    let value = parse_amount(&normalized);
    if value.value() < FULL_AMOUNT_THRESHOLD {
        Amount::from_raw(value.value() * 1_000.0)
    } else {
        value
    }
}

fn has_known_suffix(normalized: &str) -> bool {
    SUFFIXES
        .iter()
        .any(|(suffix, _)| normalized.ends_with(suffix))
}

/// Renders an optional amount for display.
///
/// `None` means "no value" and renders as the empty string; an actual zero
/// renders as `"0"`. The distinction keeps cleared fields cleared instead
/// of showing a spurious zero.
#[must_use]
pub fn format_amount(value: Option<Amount>) -> String {
    match value {
        Some(amount) => amount.to_display(),
        None => String::new(),
    }
}
