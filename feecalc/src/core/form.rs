// src/core/form.rs
use crate::config::Placeholders;
use crate::core::calculator::compute;
use crate::core::error::CalculationError;
use crate::models::{CalculationInput, CalculationResult, PricingModel};
use rust_decimal::Decimal;
use std::str::FromStr as _;

/// Raw text of the five input fields, exactly as entered. `None` and blank
/// text both mean the field was left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub volume: Option<String>,
    pub cc_percent: Option<String>,
    pub comp_rate: Option<String>,
    pub comp_cost: Option<String>,
    pub own_cost: Option<String>,
}

impl FormFields {
    /// Fields set on `other` replace the ones on `self`.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            volume: other.volume.or(self.volume),
            cc_percent: other.cc_percent.or(self.cc_percent),
            comp_rate: other.comp_rate.or(self.comp_rate),
            comp_cost: other.comp_cost.or(self.comp_cost),
            own_cost: other.own_cost.or(self.own_cost),
        }
    }
}

/// A successful calculation together with the numbers it was run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub input: CalculationInput,
    pub result: CalculationResult,
}

/// Turns raw field text into a [`CalculationInput`] and runs the calculator.
#[derive(Debug, Clone, Default)]
pub struct FormAdapter {
    model: PricingModel,
    placeholders: Placeholders,
}

impl FormAdapter {
    #[must_use]
    pub const fn new(model: PricingModel, placeholders: Placeholders) -> Self {
        Self {
            model,
            placeholders,
        }
    }

    #[must_use]
    pub const fn model(&self) -> PricingModel {
        self.model
    }

    /// Reads all five fields, falling back to placeholders for empty ones.
    /// Percentages are clamped to 0-100 and fixed costs to non-negative;
    /// volume is passed through so the calculator can reject it.
    #[must_use]
    pub fn read_input(&self, fields: &FormFields) -> CalculationInput {
        let percent = |value: Decimal| value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        let amount = |value: Decimal| value.max(Decimal::ZERO);

        CalculationInput {
            monthly_volume: field_value(fields.volume.as_deref(), &self.placeholders.volume),
            credit_card_percentage: percent(field_value(
                fields.cc_percent.as_deref(),
                &self.placeholders.cc_percent,
            )),
            competitor_rate: percent(field_value(
                fields.comp_rate.as_deref(),
                &self.placeholders.comp_rate,
            )),
            competitor_fixed_cost: amount(field_value(
                fields.comp_cost.as_deref(),
                &self.placeholders.comp_cost,
            )),
            own_fixed_cost: amount(field_value(
                fields.own_cost.as_deref(),
                &self.placeholders.own_cost,
            )),
        }
    }

    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidVolume`] when the volume field
    /// reads as zero or less, and [`CalculationError::OutOfRange`] when the
    /// amounts are too large to compute with. Nothing should be displayed in
    /// either case.
    pub fn submit(&self, fields: &FormFields) -> Result<Submission, CalculationError> {
        let input = self.read_input(fields);
        let result = compute(&input, self.model)?;
        Ok(Submission { input, result })
    }
}

/// Strips `,`, `$`, `%` and whitespace and parses what is left.
///
/// Returns `None` for empty text and zero for anything that is not a number.
#[must_use]
pub fn normalize_number(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '%') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    Some(Decimal::from_str(&cleaned).unwrap_or_else(|_| {
        tracing::warn!(input = raw, "not a number, using 0");
        Decimal::ZERO
    }))
}

fn field_value(raw: Option<&str>, placeholder: &str) -> Decimal {
    raw.and_then(normalize_number)
        .or_else(|| normalize_number(placeholder))
        .unwrap_or(Decimal::ZERO)
}
