// src/utils.rs
use crate::config::AnimationConfig;
use crate::core::animation::{CancelToken, CountUp};
use crate::core::form::Submission;
use crate::models::{CalculationInput, CalculationResult, Personalization, PricingModel};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Write as _};

const DEFAULT_COMPETITOR_LABEL: &str = "Current processor";
const OWN_LABEL: &str = "Surcharging";

/// Everything printed for one calculation, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub competitor: String,
    pub practice: Option<String>,
    pub model: PricingModel,
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub effective_rate: Option<Decimal>,
    pub formatted: FormattedResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResult {
    pub competitor_processing_cost: String,
    pub competitor_total_cost: String,
    pub own_processing_cost: String,
    pub own_total_cost: String,
    pub monthly_savings: String,
    pub annual_savings: String,
    pub effective_rate: Option<String>,
}

impl Report {
    #[must_use]
    pub fn new(submission: &Submission, personalization: &Personalization) -> Self {
        let result = submission.result;
        let effective_rate = result.effective_rate();
        let title = personalization.practice_possessive().map_or_else(
            || String::from("Your savings with surcharging"),
            |owner| format!("{owner} savings with surcharging"),
        );

        Self {
            title,
            competitor: personalization
                .competitor_title()
                .unwrap_or_else(|| DEFAULT_COMPETITOR_LABEL.to_owned()),
            practice: personalization.practice.clone(),
            model: result.model,
            input: submission.input,
            result,
            effective_rate,
            formatted: FormattedResult {
                competitor_processing_cost: format_currency(result.competitor_processing_cost),
                competitor_total_cost: format_currency(result.competitor_total_cost),
                own_processing_cost: format_currency(result.own_processing_cost),
                own_total_cost: format_currency(result.own_total_cost),
                monthly_savings: format_currency(result.monthly_savings),
                annual_savings: format_currency(result.annual_savings),
                effective_rate: effective_rate.map(format_rate),
            },
        }
    }
}

/// `1852.2` -> `$1,852.20`, `-53.9` -> `-$53.90`. Rounds half away from zero.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Formats a fraction as a percentage: `0.014565` -> `1.46%`.
#[must_use]
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.2}%")
}

fn savings_line(label: &str, amount: Decimal) -> String {
    format!("{label:<20}{:>16}", format_currency(amount))
}

fn render_comparison(report: &Report) -> String {
    let formatted = &report.formatted;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} model)", report.title, report.model);
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20}{:>20}{:>16}", "", report.competitor, OWN_LABEL);
    let _ = writeln!(
        out,
        "{:<20}{:>20}{:>16}",
        "Processing cost", formatted.competitor_processing_cost, formatted.own_processing_cost
    );
    let _ = writeln!(
        out,
        "{:<20}{:>20}{:>16}",
        "Fixed cost",
        format_currency(report.input.competitor_fixed_cost),
        format_currency(report.input.own_fixed_cost)
    );
    let _ = writeln!(
        out,
        "{:<20}{:>20}{:>16}",
        "Total monthly cost", formatted.competitor_total_cost, formatted.own_total_cost
    );
    out
}

fn render_effective_rate(report: &Report) -> Option<String> {
    report
        .formatted
        .effective_rate
        .as_ref()
        .map(|rate| format!("{:<20}{rate:>16}", "Effective rate"))
}

/// Plain-text rendering of a report, without animation.
#[must_use]
pub fn render_report(report: &Report) -> String {
    let mut out = render_comparison(report);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", savings_line("Monthly savings", report.result.monthly_savings));
    let _ = writeln!(out, "{}", savings_line("Annual savings", report.result.annual_savings));
    if let Some(line) = render_effective_rate(report) {
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Prints the report to stdout. With `animation`, the savings figures count
/// up to their final values.
pub fn print_report(report: &Report, animation: Option<AnimationConfig>, cancel: &CancelToken) {
    let Some(animation) = animation else {
        print!("{}", render_report(report));
        return;
    };

    println!("{}", render_comparison(report));
    for (label, amount) in [
        ("Monthly savings", report.result.monthly_savings),
        ("Annual savings", report.result.annual_savings),
    ] {
        let count_up = CountUp::new(amount, animation.duration(), animation.frames);
        count_up.play(cancel, |value| {
            print!("\r{}", savings_line(label, value));
            let _ = io::stdout().flush();
        });
        println!();
    }
    if let Some(line) = render_effective_rate(report) {
        println!("{line}");
    }
}

/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn report_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
