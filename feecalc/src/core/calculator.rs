// src/core/calculator.rs
use crate::core::error::CalculationError;
use crate::models::{CalculationInput, CalculationResult, PricingModel};
use rust_decimal::Decimal;

/// Surcharge passed on to the payer for credit-card transactions (3%).
pub const SURCHARGE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Processor rate applied to everything that goes through under the
/// formula model (2.913%).
pub const BASE_RATE: Decimal = Decimal::from_parts(2913, 0, 0, false, 5);

/// Approximate effective rate of the flat-rate model (1.39%).
pub const FLAT_EFFECTIVE_RATE: Decimal = Decimal::from_parts(139, 0, 0, false, 4);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// What the surcharging side pays the processor, plus the figures it was
/// derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OwnProcessing {
    credit_card_volume: Decimal,
    surcharge_collected: Decimal,
    cost: Decimal,
}

impl PricingModel {
    /// `None` when an intermediate amount leaves the `Decimal` range.
    fn own_processing(self, input: &CalculationInput) -> Option<OwnProcessing> {
        let credit_card_volume = input
            .monthly_volume
            .checked_mul(input.credit_card_percentage.checked_div(Decimal::ONE_HUNDRED)?)?;
        match self {
            Self::Formula => {
                let surcharge_collected = credit_card_volume.checked_mul(SURCHARGE_RATE)?;
                let gross_fee = input
                    .monthly_volume
                    .checked_add(surcharge_collected)?
                    .checked_mul(BASE_RATE)?;
                let card_fee = credit_card_volume
                    .checked_add(surcharge_collected)?
                    .checked_mul(BASE_RATE)?;
                Some(OwnProcessing {
                    credit_card_volume,
                    surcharge_collected,
                    cost: gross_fee.checked_sub(card_fee)?,
                })
            }
            Self::FlatRate => Some(OwnProcessing {
                credit_card_volume,
                surcharge_collected: Decimal::ZERO,
                cost: input.monthly_volume.checked_mul(FLAT_EFFECTIVE_RATE)?,
            }),
        }
    }
}

/// Computes the competitor and surcharging costs for one set of inputs.
///
/// Percentages are used as given; clamping them is the caller's job.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidVolume`] when the monthly volume is
/// zero or negative, and [`CalculationError::OutOfRange`] when an amount is
/// too large to compute with. No result is produced in either case.
pub fn compute(
    input: &CalculationInput,
    model: PricingModel,
) -> Result<CalculationResult, CalculationError> {
    if input.monthly_volume <= Decimal::ZERO {
        return Err(CalculationError::InvalidVolume {
            volume: input.monthly_volume,
        });
    }

    let result = checked_result(input, model).ok_or(CalculationError::OutOfRange)?;
    tracing::debug!(%model, ?input, ?result, "computed fee comparison");
    Ok(result)
}

fn checked_result(input: &CalculationInput, model: PricingModel) -> Option<CalculationResult> {
    let own = model.own_processing(input)?;
    let competitor_processing_cost = input
        .monthly_volume
        .checked_mul(input.competitor_rate.checked_div(Decimal::ONE_HUNDRED)?)?;
    let competitor_total_cost = input
        .competitor_fixed_cost
        .checked_add(competitor_processing_cost)?;
    let own_total_cost = input.own_fixed_cost.checked_add(own.cost)?;
    let monthly_savings = competitor_total_cost.checked_sub(own_total_cost)?;

    Some(CalculationResult {
        model,
        monthly_volume: input.monthly_volume,
        credit_card_volume: own.credit_card_volume,
        surcharge_collected: own.surcharge_collected,
        competitor_processing_cost,
        competitor_total_cost,
        own_processing_cost: own.cost,
        own_total_cost,
        monthly_savings,
        annual_savings: monthly_savings.checked_mul(MONTHS_PER_YEAR)?,
    })
}
