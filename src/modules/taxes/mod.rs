pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CalculationRequest, CalculationResult};
pub use repositories::{DeductionConfigRepository, InMemoryDeductionStore};
pub use services::TaxCalculator;
