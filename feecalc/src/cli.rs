// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::config::{Config, load_config, load_config_file};
use crate::core::animation::CancelToken;
use crate::core::form::{FormAdapter, FormFields};
use crate::core::prefill::{Prefill, parse_prefill};
use crate::models::{Personalization, PricingModel};
use crate::utils::{Report, print_report, report_json};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Total monthly card-processing volume (e.g., "50,000")
    #[arg(long, allow_hyphen_values = true)]
    pub volume: Option<String>,

    /// Percentage of volume paid by credit card
    #[arg(long, allow_hyphen_values = true)]
    pub cc_percent: Option<String>,

    /// Competitor's processing rate in percent (e.g., "2.9")
    #[arg(long, allow_hyphen_values = true)]
    pub comp_rate: Option<String>,

    /// Competitor's monthly flat or subscription fee
    #[arg(long, allow_hyphen_values = true)]
    pub comp_cost: Option<String>,

    /// Monthly flat or subscription fee under the surcharging model
    #[arg(long, alias = "di-cost", allow_hyphen_values = true)]
    pub own_cost: Option<String>,

    /// Pricing model for the surcharging side (defaults to the config file's)
    #[arg(short, long, value_enum)]
    pub model: Option<PricingModel>,

    /// Pre-fill fields from a URL or query string (e.g., "volume=10000&practice=Oak Clinic")
    #[arg(short, long)]
    pub query: Option<String>,

    /// Competitor name shown in the report
    #[arg(long)]
    pub competitor: Option<String>,

    /// Practice name shown in the report title
    #[arg(short, long)]
    pub practice: Option<String>,

    /// Config file to use instead of the nearest .feecalc.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Count the savings figures up instead of printing them at once
    #[arg(short, long, conflicts_with = "json")]
    pub animate: bool,

    /// Print the report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn form_fields(&self) -> FormFields {
        FormFields {
            volume: self.volume.clone(),
            cc_percent: self.cc_percent.clone(),
            comp_rate: self.comp_rate.clone(),
            comp_cost: self.comp_cost.clone(),
            own_cost: self.own_cost.clone(),
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => load_config_file(path),
            None => {
                let dir = env::current_dir().context("Failed to read current directory")?;
                load_config(&dir)
            }
        }
    }
}

/// Runs one calculation and returns the report without printing it.
///
/// Explicit field flags win over `--query` values, which win over the
/// config file's placeholders.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The monthly volume is zero, negative, or not a number
/// * The amounts are too large to compute with
pub fn build_report(args: &Args, config: Config) -> Result<Report> {
    let prefill = args.query.as_deref().map(parse_prefill).unwrap_or_default();
    let Prefill {
        fields: prefilled_fields,
        personalization: prefilled_names,
    } = prefill;
    let fields = prefilled_fields.overlay(args.form_fields());
    let personalization = prefilled_names.overlay(Personalization::new(
        args.competitor.clone(),
        args.practice.clone(),
    ));

    let adapter = FormAdapter::new(
        args.model.unwrap_or(config.model),
        config.placeholders,
    );
    tracing::debug!(model = %adapter.model(), "calculating");
    let submission = match adapter.submit(&fields) {
        Ok(submission) => submission,
        Err(err) => {
            let message = err.user_message();
            return Err(anyhow::Error::new(err).context(message));
        }
    };

    Ok(Report::new(&submission, &personalization))
}

/// Runs one calculation and prints the report.
///
/// # Errors
///
/// Returns any error from loading the config or [`build_report`], or if the
/// report cannot be serialized to JSON.
pub fn run(args: Args) -> Result<()> {
    let config = args.load_config()?;
    let animation = config.animation;
    let report = build_report(&args, config)?;

    if args.json {
        println!("{}", report_json(&report).context("Failed to serialize report")?);
    } else {
        print_report(&report, args.animate.then_some(animation), &CancelToken::new());
    }

    Ok(())
}
