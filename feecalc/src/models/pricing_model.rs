// src/models/pricing_model.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which formula prices the surcharging side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum PricingModel {
    /// Exact surcharge formula: 3% surcharge on card volume, 2.913% base rate
    #[default]
    Formula,
    /// Approximate flat 1.39% effective rate on total volume
    #[value(alias = "flatRate")]
    FlatRate,
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formula => f.write_str("formula"),
            Self::FlatRate => f.write_str("flatRate"),
        }
    }
}
