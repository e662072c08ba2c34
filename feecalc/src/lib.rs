// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use cli::{Args, build_report, run};
pub use config::{Config, load_config, load_config_file};
pub use crate::core::animation::{CancelToken, CountUp};
pub use crate::core::calculator::compute;
pub use crate::core::error::CalculationError;
pub use crate::core::form::{FormAdapter, FormFields, Submission, normalize_number};
pub use crate::core::prefill::{Prefill, parse_prefill};
pub use models::{CalculationInput, CalculationResult, Personalization, PricingModel};

/// Sets up logging to stderr. `RUST_LOG` is honored unless `verbose`
/// forces debug output.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
