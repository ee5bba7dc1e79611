//! Shared application state and route registration, used by `main` and by
//! the HTTP-level tests.

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::middleware::{json_config, AdminCredentials};
use crate::modules::admin::repositories::{DeductionAdminRepository, MySqlDeductionAdminRepository};
use crate::modules::admin::{self, AdminService};
use crate::modules::health;
use crate::modules::taxes::repositories::{
    DeductionConfigRepository, InMemoryDeductionStore, MySqlDeductionConfigRepository,
};
use crate::modules::taxes::{self, TaxCalculator};

/// Services shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<TaxCalculator>,
    pub admin_service: Arc<AdminService>,
    pub deduction_repository: Arc<dyn DeductionConfigRepository>,
    pub admin_credentials: AdminCredentials,
}

impl AppState {
    pub fn new(
        deduction_repository: Arc<dyn DeductionConfigRepository>,
        admin_repository: Arc<dyn DeductionAdminRepository>,
        admin_credentials: AdminCredentials,
    ) -> Self {
        Self {
            calculator: Arc::new(TaxCalculator::new(deduction_repository.clone())),
            admin_service: Arc::new(AdminService::new(admin_repository)),
            deduction_repository,
            admin_credentials,
        }
    }

    /// State backed by the MySQL `deduction_configs` table
    pub fn from_pool(pool: MySqlPool, admin_credentials: AdminCredentials) -> Self {
        Self::new(
            Arc::new(MySqlDeductionConfigRepository::new(pool.clone())),
            Arc::new(MySqlDeductionAdminRepository::new(pool)),
            admin_credentials,
        )
    }

    /// State backed by a process-local store; reads and admin writes share it
    pub fn in_memory(store: InMemoryDeductionStore, admin_credentials: AdminCredentials) -> Self {
        Self::new(Arc::new(store.clone()), Arc::new(store), admin_credentials)
    }
}

/// Register app data and every route
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let credentials = state.admin_credentials.clone();

        cfg.app_data(json_config())
            .app_data(web::Data::new(state.calculator))
            .app_data(web::Data::new(state.admin_service))
            .app_data(web::Data::new(state.deduction_repository))
            .configure(health::controllers::configure)
            .configure(taxes::controllers::configure)
            .configure(move |cfg| admin::controllers::configure(cfg, credentials));
    }
}
