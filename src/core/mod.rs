pub mod error;
pub mod money;

pub use error::{AppError, AppResult, Result};
