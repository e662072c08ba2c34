// src/models.rs
pub mod calculation_input;
pub mod calculation_result;
pub mod personalization;
pub mod pricing_model;

pub use calculation_input::CalculationInput;
pub use calculation_result::CalculationResult;
pub use personalization::Personalization;
pub use pricing_model::PricingModel;
