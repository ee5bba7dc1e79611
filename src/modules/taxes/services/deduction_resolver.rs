use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::modules::taxes::models::{DeductionCeilings, DeductionKind};
use crate::modules::taxes::repositories::DeductionConfigRepository;

/// Resolves configured deduction ceilings, falling back to built-in defaults
/// whenever the store cannot answer.
#[derive(Clone)]
pub struct DeductionResolver {
    repository: Arc<dyn DeductionConfigRepository>,
}

impl DeductionResolver {
    pub fn new(repository: Arc<dyn DeductionConfigRepository>) -> Self {
        Self { repository }
    }

    /// Never fails: a lookup error is logged and replaced by the default.
    pub async fn resolve(&self, kind: DeductionKind) -> Decimal {
        match self.repository.find_by_name(kind.config_name()).await {
            Ok(config) => {
                debug!(deduction = %kind, value = %config.value, "Resolved deduction ceiling");
                config.value
            }
            Err(err) => {
                let fallback = kind.default_value();
                warn!(
                    deduction = %kind,
                    error = %err,
                    fallback = %fallback,
                    "Failed to read deduction ceiling, using default"
                );
                fallback
            }
        }
    }

    /// Resolve both ceilings for one calculation or one batch
    pub async fn snapshot(&self) -> DeductionCeilings {
        DeductionCeilings {
            personal: self.resolve(DeductionKind::Personal).await,
            kreceipt: self.resolve(DeductionKind::KReceipt).await,
        }
    }
}
