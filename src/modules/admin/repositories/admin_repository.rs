use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::error::AppResult;
use crate::modules::taxes::models::DeductionKind;
use crate::modules::taxes::repositories::InMemoryDeductionStore;

/// Write side of the deduction configuration store
#[async_trait]
pub trait DeductionAdminRepository: Send + Sync {
    /// Store a new ceiling and return the value now persisted
    async fn update_deduction(&self, kind: DeductionKind, value: Decimal) -> AppResult<Decimal>;
}

pub struct MySqlDeductionAdminRepository {
    pool: MySqlPool,
}

impl MySqlDeductionAdminRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeductionAdminRepository for MySqlDeductionAdminRepository {
    async fn update_deduction(&self, kind: DeductionKind, value: Decimal) -> AppResult<Decimal> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO deduction_configs (name, value)
            VALUES (?, ?)
            ON DUPLICATE KEY UPDATE value = VALUES(value)
            "#,
        )
        .bind(kind.config_name())
        .bind(value)
        .execute(&mut *tx)
        .await?;

        let stored: Decimal = sqlx::query_scalar(
            r#"
            SELECT value
            FROM deduction_configs
            WHERE name = ?
            "#,
        )
        .bind(kind.config_name())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(stored)
    }
}

#[async_trait]
impl DeductionAdminRepository for InMemoryDeductionStore {
    async fn update_deduction(&self, kind: DeductionKind, value: Decimal) -> AppResult<Decimal> {
        Ok(self.set(kind.config_name(), value).await)
    }
}
