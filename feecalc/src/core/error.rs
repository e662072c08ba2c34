// src/core/error.rs
use rust_decimal::Decimal;
use thiserror::Error;

/// Shown to the user when a calculation is refused.
pub const INVALID_VOLUME_MESSAGE: &str = "Please enter a valid monthly processing volume.";

pub const OUT_OF_RANGE_MESSAGE: &str = "Please enter smaller amounts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("monthly volume must be greater than zero, got {volume}")]
    InvalidVolume { volume: Decimal },
    #[error("amounts are too large to compute with")]
    OutOfRange,
}

impl CalculationError {
    #[inline]
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidVolume { .. } => INVALID_VOLUME_MESSAGE,
            Self::OutOfRange => OUT_OF_RANGE_MESSAGE,
        }
    }
}
