//! Personal income tax calculation service.
//!
//! Computes progressive tax for a single filer from total income, withheld
//! tax and allowances, with deduction ceilings kept in a configuration store
//! that administrators can update at runtime.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::admin;
pub use modules::taxes;
