// src/models/calculation_result.rs
use crate::models::PricingModel;
use rust_decimal::Decimal;
use serde::Serialize;

/// Side-by-side monthly costs for the competitor and the surcharging model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub model: PricingModel,
    pub monthly_volume: Decimal,
    pub credit_card_volume: Decimal,
    /// Zero under the flat-rate model, which ignores the card/debit split.
    pub surcharge_collected: Decimal,
    pub competitor_processing_cost: Decimal,
    pub competitor_total_cost: Decimal,
    pub own_processing_cost: Decimal,
    pub own_total_cost: Decimal,
    pub monthly_savings: Decimal,
    pub annual_savings: Decimal,
}

impl CalculationResult {
    /// Own processing cost as a fraction of everything that passed through
    /// the processor, surcharges included. `None` when nothing did.
    #[inline]
    #[must_use]
    pub fn effective_rate(&self) -> Option<Decimal> {
        let processed = self.monthly_volume.checked_add(self.surcharge_collected)?;
        if processed.is_zero() {
            return None;
        }
        self.own_processing_cost.checked_div(processed)
    }
}
