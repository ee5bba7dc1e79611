use actix_web::{error::JsonPayloadError, web, Error, HttpRequest};

use crate::core::AppError;

/// Turns JSON body extraction failures into the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        other => format!("Invalid request body: {}", other),
    };

    AppError::validation(message).into()
}

/// JSON extractor configuration shared by every JSON endpoint
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
