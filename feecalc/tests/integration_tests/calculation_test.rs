// tests/integration_tests/calculation_test.rs
use feecalc::{CalculationError, CalculationInput, PricingModel, compute};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_models_share_competitor_side() {
    let input = CalculationInput::new(dec!(25000), dec!(65), dec!(2.75), dec!(59), dec!(149));

    let formula = compute(&input, PricingModel::Formula).unwrap();
    let flat = compute(&input, PricingModel::FlatRate).unwrap();

    assert_eq!(formula.competitor_processing_cost, dec!(687.50));
    assert_eq!(formula.competitor_total_cost, dec!(746.50));
    assert_eq!(formula.competitor_total_cost, flat.competitor_total_cost);
    assert_ne!(formula.own_processing_cost, flat.own_processing_cost);
    assert_eq!(flat.own_processing_cost, dec!(347.50));
}

#[test]
fn test_formula_only_debit_share_is_charged() {
    let input = CalculationInput::new(dec!(20000), dec!(75), dec!(3), dec!(0), dec!(0));
    let result = compute(&input, PricingModel::Formula).unwrap();

    // 25% debit share at the base rate
    assert_eq!(result.own_processing_cost, dec!(5000) * dec!(0.02913));
    assert_eq!(result.own_processing_cost, dec!(145.65));
}

#[test]
fn test_savings_relationships() {
    let input = CalculationInput::new(dec!(10000), dec!(50), dec!(3), dec!(100), dec!(100));
    for model in [PricingModel::Formula, PricingModel::FlatRate] {
        let result = compute(&input, model).unwrap();
        assert_eq!(result.model, model);
        assert_eq!(
            result.monthly_savings,
            result.competitor_total_cost - result.own_total_cost
        );
        assert_eq!(result.annual_savings, result.monthly_savings * dec!(12));
    }
}

#[test]
fn test_invalid_volume_has_no_result() {
    let input = CalculationInput::default();
    let err = compute(&input, PricingModel::Formula).unwrap_err();
    assert_eq!(
        err,
        CalculationError::InvalidVolume {
            volume: Decimal::ZERO
        }
    );
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn test_effective_rate_of_computed_result() {
    let input = CalculationInput::new(dec!(10000), dec!(0), dec!(3), dec!(0), dec!(0));
    let result = compute(&input, PricingModel::FlatRate).unwrap();
    assert_eq!(result.effective_rate(), Some(dec!(0.0139)));
}
