// tests/integration_tests/prefill_test.rs
use feecalc::{FormAdapter, PricingModel, parse_prefill};
use feecalc::config::Placeholders;
use rust_decimal_macros::dec;

#[test]
fn test_prefilled_link_computes() {
    let prefill = parse_prefill(
        "https://example.com/savings?volume=10%2C000&cc_percent=50&comp_rate=3&comp_cost=100&di_cost=100&competitor=clover&practice=Oak+Vets",
    );
    let adapter = FormAdapter::new(PricingModel::Formula, Placeholders::default());
    let submission = adapter.submit(&prefill.fields).unwrap();

    assert_eq!(submission.result.monthly_savings, dec!(154.35));
    assert_eq!(
        prefill.personalization.competitor_title().as_deref(),
        Some("Clover")
    );
    assert_eq!(
        prefill.personalization.practice_possessive().as_deref(),
        Some("Oak Vets'")
    );
}

#[test]
fn test_partial_prefill_keeps_placeholders() {
    let prefill = parse_prefill("volume=20000");
    let adapter = FormAdapter::new(PricingModel::FlatRate, Placeholders::default());
    let input = adapter.read_input(&prefill.fields);

    assert_eq!(input.monthly_volume, dec!(20000));
    assert_eq!(input.credit_card_percentage, dec!(70));
    assert_eq!(input.own_fixed_cost, dec!(199));
}
