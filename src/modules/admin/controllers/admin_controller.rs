use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::auth::{AdminAuth, AdminCredentials, AdminIdentity};
use crate::modules::admin::models::{
    KReceiptDeductionResponse, PersonalDeductionResponse, UpdateDeductionRequest,
};
use crate::modules::admin::services::AdminService;
use crate::modules::taxes::models::DeductionKind;

/// Update the personal deduction
/// POST /admin/deductions/personal
pub async fn update_personal_deduction(
    service: web::Data<Arc<AdminService>>,
    admin: web::ReqData<AdminIdentity>,
    request: web::Json<UpdateDeductionRequest>,
) -> Result<HttpResponse, AppError> {
    tracing::info!(admin = %admin.0, amount = %request.amount, "Personal deduction update requested");

    let personal_deduction = service
        .update_deduction(DeductionKind::Personal, request.amount)
        .await?;

    Ok(HttpResponse::Ok().json(PersonalDeductionResponse { personal_deduction }))
}

/// Update the k-receipt ceiling
/// POST /admin/deductions/k-receipt
pub async fn update_kreceipt_deduction(
    service: web::Data<Arc<AdminService>>,
    admin: web::ReqData<AdminIdentity>,
    request: web::Json<UpdateDeductionRequest>,
) -> Result<HttpResponse, AppError> {
    tracing::info!(admin = %admin.0, amount = %request.amount, "K-receipt deduction update requested");

    let k_receipt = service
        .update_deduction(DeductionKind::KReceipt, request.amount)
        .await?;

    Ok(HttpResponse::Ok().json(KReceiptDeductionResponse { k_receipt }))
}

/// Configure admin routes behind basic authentication
pub fn configure(cfg: &mut web::ServiceConfig, credentials: AdminCredentials) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminAuth::new(credentials))
            .route(
                "/deductions/personal",
                web::post().to(update_personal_deduction),
            )
            .route(
                "/deductions/k-receipt",
                web::post().to(update_kreceipt_deduction),
            ),
    );
}
