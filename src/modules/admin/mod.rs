//! Administrative updates to the deduction ceilings

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use services::AdminService;
