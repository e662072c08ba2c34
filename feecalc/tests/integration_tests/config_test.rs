// tests/integration_tests/config_test.rs
use super::common::create_config_file;
use anyhow::Result;
use feecalc::{FormAdapter, FormFields, PricingModel, load_config};
use rust_decimal_macros::dec;
use tempfile::TempDir;

#[test]
fn test_config_placeholders_feed_form() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(
        temp_dir.path(),
        "model = \"flatRate\"\n\n[placeholders]\nvolume = \"10,000\"\ncomp_rate = \"3\"\ncomp_cost = \"100\"\nown_cost = \"100\"\n",
    )?;

    let config = load_config(temp_dir.path())?;
    assert_eq!(config.model, PricingModel::FlatRate);

    let adapter = FormAdapter::new(config.model, config.placeholders);
    let submission = adapter.submit(&FormFields::default())?;
    assert_eq!(submission.result.own_total_cost, dec!(239.00));
    assert_eq!(submission.result.annual_savings, dec!(1932.00));
    Ok(())
}

#[test]
fn test_no_config_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = load_config(temp_dir.path())?;
    assert_eq!(config.model, PricingModel::Formula);
    assert_eq!(config.animation.frames, 30);
    Ok(())
}

#[test]
fn test_unknown_model_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_config_file(temp_dir.path(), "model = \"blended\"\n")?;
    assert!(load_config(temp_dir.path()).is_err());
    Ok(())
}
