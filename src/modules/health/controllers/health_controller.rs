use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::taxes::models::DeductionKind;
use crate::modules::taxes::repositories::DeductionConfigRepository;

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Readiness response; one flag per configured ceiling
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub personal_deduction: bool,
    pub kreceipt_deduction: bool,
}

/// GET /health - Liveness probe
/// Does not touch the configuration store
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
///
/// Calculations still succeed on default ceilings when the store is down,
/// so this probe is the only place that surfaces a store outage.
pub async fn readiness_check(
    repository: web::Data<Arc<dyn DeductionConfigRepository>>,
) -> impl Responder {
    let mut flags = [false; 2];

    for (flag, kind) in flags.iter_mut().zip(DeductionKind::ALL) {
        match repository.find_by_name(kind.config_name()).await {
            Ok(_) => *flag = true,
            Err(e) => {
                tracing::error!(deduction = %kind, error = %e, "Readiness check failed");
            }
        }
    }

    let response = ReadinessResponse {
        ready: flags.iter().all(|ok| *ok),
        personal_deduction: flags[0],
        kreceipt_deduction: flags[1],
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
