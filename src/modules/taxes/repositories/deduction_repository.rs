use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tokio::sync::RwLock;

use crate::core::error::{AppError, AppResult};
use crate::modules::taxes::models::{DeductionConfig, DeductionKind};

/// Read side of the deduction configuration store
#[async_trait]
pub trait DeductionConfigRepository: Send + Sync {
    /// Find a ceiling by its row name. Fails with `AppError::NotFound` when
    /// no row exists.
    async fn find_by_name(&self, name: &str) -> AppResult<DeductionConfig>;
}

/// MySQL-backed configuration store
#[derive(Clone)]
pub struct MySqlDeductionConfigRepository {
    pool: MySqlPool,
}

impl MySqlDeductionConfigRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeductionConfigRepository for MySqlDeductionConfigRepository {
    async fn find_by_name(&self, name: &str) -> AppResult<DeductionConfig> {
        let config = sqlx::query_as::<_, DeductionConfig>(
            r#"
            SELECT name, value
            FROM deduction_configs
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        config.ok_or_else(|| AppError::not_found(format!("deduction config '{}'", name)))
    }
}

/// Process-local store, used for tests and database-less runs
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeductionStore {
    values: Arc<RwLock<HashMap<String, Decimal>>>,
}

impl InMemoryDeductionStore {
    /// An empty store; every lookup fails with `NotFound`
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with each kind's default value
    pub fn with_defaults() -> Self {
        let values = DeductionKind::ALL
            .iter()
            .map(|kind| (kind.config_name().to_string(), kind.default_value()))
            .collect();

        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    pub async fn set(&self, name: &str, value: Decimal) -> Decimal {
        self.values.write().await.insert(name.to_string(), value);
        value
    }

    pub async fn remove(&self, name: &str) {
        self.values.write().await.remove(name);
    }
}

#[async_trait]
impl DeductionConfigRepository for InMemoryDeductionStore {
    async fn find_by_name(&self, name: &str) -> AppResult<DeductionConfig> {
        self.values
            .read()
            .await
            .get(name)
            .map(|value| DeductionConfig::new(name, *value))
            .ok_or_else(|| AppError::not_found(format!("deduction config '{}'", name)))
    }
}
