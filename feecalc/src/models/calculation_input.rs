// src/models/calculation_input.rs
use rust_decimal::Decimal;
use serde::Serialize;

/// The five numbers a comparison is computed from. Percentages are on a
/// 0-100 scale, amounts are monthly currency values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalculationInput {
    pub monthly_volume: Decimal,
    pub credit_card_percentage: Decimal,
    pub competitor_rate: Decimal,
    pub competitor_fixed_cost: Decimal,
    pub own_fixed_cost: Decimal,
}

impl CalculationInput {
    #[inline]
    #[must_use]
    pub const fn new(
        monthly_volume: Decimal,
        credit_card_percentage: Decimal,
        competitor_rate: Decimal,
        competitor_fixed_cost: Decimal,
        own_fixed_cost: Decimal,
    ) -> Self {
        Self {
            monthly_volume,
            credit_card_percentage,
            competitor_rate,
            competitor_fixed_cost,
            own_fixed_cost,
        }
    }
}
