use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info};

use crate::core::error::{AppError, AppResult};
use crate::modules::admin::repositories::DeductionAdminRepository;
use crate::modules::taxes::models::{DeductionKind, MAX_CONFIGURABLE_DEDUCTION};

/// Validates and applies administrator changes to the deduction ceilings
pub struct AdminService {
    repository: Arc<dyn DeductionAdminRepository>,
}

impl AdminService {
    pub fn new(repository: Arc<dyn DeductionAdminRepository>) -> Self {
        Self { repository }
    }

    pub async fn update_deduction(&self, kind: DeductionKind, amount: Decimal) -> AppResult<Decimal> {
        Self::validate_amount(kind, amount)?;

        match self.repository.update_deduction(kind, amount).await {
            Ok(stored) => {
                info!(deduction = %kind, value = %stored, "Updated deduction ceiling");
                Ok(stored)
            }
            Err(e) => {
                error!(deduction = %kind, error = %e, "Failed to update deduction ceiling");
                Err(e)
            }
        }
    }

    /// Amount must lie in [0, 100000]
    pub fn validate_amount(kind: DeductionKind, amount: Decimal) -> AppResult<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation(format!("{} cannot be negative", kind)));
        }

        if amount > MAX_CONFIGURABLE_DEDUCTION {
            return Err(AppError::validation(format!(
                "{} cannot exceed {}",
                kind, MAX_CONFIGURABLE_DEDUCTION
            )));
        }

        Ok(())
    }
}
