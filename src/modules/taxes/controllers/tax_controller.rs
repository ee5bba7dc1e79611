//! Tax calculation endpoints
//!
//! `POST /tax/calculations` computes one request, `POST
//! /tax/calculations/upload-csv` computes every row of an uploaded file
//! against one configuration snapshot.

use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;

use crate::core::error::AppError;
use crate::modules::taxes::models::CalculationRequest;
use crate::modules::taxes::services::{parse_calculation_requests, TaxCalculator};

/// Multipart field carrying the CSV file
pub const TAX_FILE_FIELD: &str = "taxFile";

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Calculate tax for a single request
/// POST /tax/calculations
pub async fn calculate_tax(
    calculator: web::Data<Arc<TaxCalculator>>,
    request: web::Json<CalculationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let result = calculator.calculate(&request).await;

    Ok(HttpResponse::Ok().json(result))
}

/// Calculate tax for every row of an uploaded CSV file
/// POST /tax/calculations/upload-csv
pub async fn upload_csv(
    calculator: web::Data<Arc<TaxCalculator>>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let contents = read_tax_file(&mut payload).await?;
    let requests = parse_calculation_requests(&contents)?;

    tracing::info!(rows = requests.len(), "Parsed tax CSV upload");

    let result = calculator.batch_calculate(&requests).await;

    Ok(HttpResponse::Ok().json(result))
}

async fn read_tax_file(payload: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::validation(format!("Invalid multipart payload: {}", e)))?;

        if field.name() != Some(TAX_FILE_FIELD) {
            continue;
        }

        let mut contents = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AppError::validation(format!("Failed to read {}: {}", TAX_FILE_FIELD, e)))?;

            if contents.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(AppError::validation(format!(
                    "{} exceeds {} bytes",
                    TAX_FILE_FIELD, MAX_UPLOAD_BYTES
                )));
            }
            contents.extend_from_slice(&chunk);
        }

        return Ok(contents);
    }

    Err(AppError::validation(format!(
        "Missing multipart field '{}'",
        TAX_FILE_FIELD
    )))
}

/// Configure tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tax/calculations")
            .route("", web::post().to(calculate_tax))
            .route("/upload-csv", web::post().to(upload_csv)),
    );
}
