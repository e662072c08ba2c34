// src/config.rs
pub mod loader;

use crate::models::PricingModel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use loader::{find_config_file, load_config, load_config_file};

/// Name of the config file looked up from the working directory upward.
pub const CONFIG_FILE_NAME: &str = ".feecalc.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: PricingModel,
    pub placeholders: Placeholders,
    pub animation: AnimationConfig,
}

/// Text used for a field that was left empty, parsed the same way as
/// anything the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Placeholders {
    pub volume: String,
    pub cc_percent: String,
    pub comp_rate: String,
    pub comp_cost: String,
    pub own_cost: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            volume: String::from("50,000"),
            cc_percent: String::from("70"),
            comp_rate: String::from("2.9"),
            comp_cost: String::from("99"),
            own_cost: String::from("199"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub frames: u32,
}

impl AnimationConfig {
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            frames: 30,
        }
    }
}
