//! Focus/blur presentation contract for numeric inputs.
//!
//! A numeric field has two presentation modes. While focused the user edits
//! a plain digit string without fighting the formatter; on blur the entry is
//! committed through the full-amount heuristic and shown in display form.
//! Focus and blur events are the only transitions.

use serde::{Deserialize, Serialize};

use crate::{Amount, parse_amount, resolve_amount};

/// Presentation mode of an [`AmountField`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    /// Formatted, read-oriented text (initial state).
    #[default]
    Display,
    /// Raw, ungrouped text the user is typing into.
    Editing,
}

/// A numeric input field with the smart-input focus/blur behavior.
#[derive(Clone, Debug, Default)]
pub struct AmountField {
    text: String,
    mode: FieldMode,
}

impl AmountField {
    /// Creates an empty field in [`FieldMode::Display`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field showing `amount` in display form.
    #[must_use]
    pub fn with_amount(amount: Amount) -> Self {
        Self {
            text: amount.to_display(),
            mode: FieldMode::Display,
        }
    }

    /// Creates a field around already-rendered text (e.g. a server-filled
    /// value), still in [`FieldMode::Display`].
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: FieldMode::Display,
        }
    }

    /// Current text, exactly as a UI would render it.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    /// The committed value of the current text.
    ///
    /// In Display mode the text is already formatted and parses literally;
    /// in Editing mode this is what *would* be committed on blur.
    #[must_use]
    pub fn amount(&self) -> Amount {
        match self.mode {
            FieldMode::Display => parse_amount(&self.text),
            FieldMode::Editing => resolve_amount(&self.text),
        }
    }

    /// Replaces the text, as typing does. Only meaningful while Editing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Focus event: switch to the raw editing representation.
    ///
    /// The displayed value is re-parsed and replaced with its plain numeric
    /// string; a parsed 0 clears the field instead. No-op when already
    /// Editing.
    pub fn focus(&mut self) {
        if self.mode == FieldMode::Editing {
            return;
        }
        let value = parse_amount(&self.text);
        self.text = if value.is_zero() {
            String::new()
        } else {
            value.to_plain()
        };
        self.mode = FieldMode::Editing;
    }

    /// Blur event: commit and switch back to display form.
    ///
    /// The text is resolved through the full-amount heuristic. A positive
    /// result overwrites the text with its display string; a resolved 0
    /// leaves the text untouched so an invalid entry is not clobbered.
    /// No-op when already Display.
    pub fn blur(&mut self) {
        if self.mode == FieldMode::Display {
            return;
        }
        let value = resolve_amount(&self.text);
        if !value.is_zero() {
            self.text = value.to_display();
        }
        self.mode = FieldMode::Display;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_display_mode() {
        let field = AmountField::new();
        assert_eq!(field.mode(), FieldMode::Display);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn focus_reveals_plain_digits() {
        let mut field = AmountField::with_amount(Amount::from_raw(1_000_000.0));
        assert_eq!(field.text(), "1.000.000");

        field.focus();
        assert_eq!(field.mode(), FieldMode::Editing);
        assert_eq!(field.text(), "1000000");
    }

    #[test]
    fn focus_clears_a_zero_value() {
        let mut field = AmountField::with_amount(Amount::ZERO);
        field.focus();
        assert_eq!(field.text(), "");
    }

    #[test]
    fn blur_formats_the_committed_value() {
        let mut field = AmountField::new();
        field.focus();
        field.set_text("1,5tr");
        field.blur();
        assert_eq!(field.mode(), FieldMode::Display);
        assert_eq!(field.text(), "1.500.000");
        assert_eq!(field.amount(), Amount::from_raw(1_500_000.0));
    }

    #[test]
    fn blur_applies_the_thousands_heuristic() {
        let mut field = AmountField::new();
        field.focus();
        field.set_text("50");
        field.blur();
        assert_eq!(field.text(), "50.000");
    }

    #[test]
    fn blur_leaves_invalid_entries_alone() {
        let mut field = AmountField::new();
        field.focus();
        field.set_text("not a number");
        field.blur();
        assert_eq!(field.text(), "not a number");
        assert_eq!(field.amount(), Amount::ZERO);
    }

    #[test]
    fn focus_blur_cycle_is_stable() {
        let mut field = AmountField::with_amount(Amount::from_raw(1_000_000.0));
        for _ in 0..3 {
            field.focus();
            assert_eq!(field.text(), "1000000");
            field.blur();
            assert_eq!(field.text(), "1.000.000");
        }
    }

    #[test]
    fn repeated_events_are_no_ops() {
        let mut field = AmountField::with_amount(Amount::from_raw(50_000.0));
        field.focus();
        let editing = field.text().to_string();
        field.focus();
        assert_eq!(field.text(), editing);
        field.blur();
        field.blur();
        assert_eq!(field.text(), "50.000");
    }
}
