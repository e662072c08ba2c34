// tests/integration_tests/form_adapter_test.rs
use super::common::form_fields;
use feecalc::config::Placeholders;
use feecalc::core::error::INVALID_VOLUME_MESSAGE;
use feecalc::{FormAdapter, FormFields, PricingModel};
use rust_decimal_macros::dec;

#[test]
fn test_formatted_text_is_normalized() {
    let adapter = FormAdapter::new(PricingModel::Formula, Placeholders::default());
    let submission = adapter
        .submit(&form_fields("$10,000.00", "50%", " 3 % ", "$100", "1,00"))
        .unwrap();

    assert_eq!(submission.input.monthly_volume, dec!(10000));
    assert_eq!(submission.input.credit_card_percentage, dec!(50));
    assert_eq!(submission.input.competitor_rate, dec!(3));
    assert_eq!(submission.input.own_fixed_cost, dec!(100));
    assert_eq!(submission.result.annual_savings, dec!(1852.20));
}

#[test]
fn test_blank_volume_falls_back_to_placeholder() {
    let adapter = FormAdapter::new(PricingModel::FlatRate, Placeholders::default());
    let fields = FormFields {
        volume: Some("   ".to_owned()),
        ..form_fields("", "50", "3", "100", "100")
    };
    let submission = adapter.submit(&fields).unwrap();
    assert_eq!(submission.input.monthly_volume, dec!(50000));
    assert_eq!(submission.input.credit_card_percentage, dec!(50));
}

#[test]
fn test_zero_volume_surfaces_message() {
    let adapter = FormAdapter::default();
    let err = adapter
        .submit(&form_fields("0", "50", "3", "100", "100"))
        .unwrap_err();
    assert_eq!(err.user_message(), INVALID_VOLUME_MESSAGE);
}

#[test]
fn test_out_of_range_percentages_are_clamped_before_compute() {
    let adapter = FormAdapter::new(PricingModel::Formula, Placeholders::default());
    let submission = adapter
        .submit(&form_fields("10000", "250", "3", "0", "0"))
        .unwrap();
    assert_eq!(submission.input.credit_card_percentage, dec!(100));
    assert_eq!(submission.result.credit_card_volume, dec!(10000));
}
