use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Every variant is reported to callers as the same generic 500.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("key phrase extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("key phrase extraction returned no documents")]
    EmptyExtraction,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ResponseError for AnalyzeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({
            "error": "Error processing query"
        }))
    }
}
