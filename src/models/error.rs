use serde::Serialize;
use actix_web::{error::JsonPayloadError, HttpResponse, ResponseError};
use actix_web::http::StatusCode;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    PayloadTooLarge(usize),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::PayloadTooLarge(limit) => write!(f, "Payload exceeds {} bytes", limit),
        }
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::OverflowKnownLength { limit, .. } => ApiError::PayloadTooLarge(limit),
            JsonPayloadError::Overflow { limit } => ApiError::PayloadTooLarge(limit),
            other => ApiError::ValidationError(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ValidationError(_) => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    code: "VALIDATION_ERROR".to_string(),
                    message: self.to_string(),
                    details: None,
                })
            }
            ApiError::PayloadTooLarge(_) => {
                HttpResponse::PayloadTooLarge().json(ErrorResponse {
                    code: "PAYLOAD_TOO_LARGE".to_string(),
                    message: self.to_string(),
                    details: None,
                })
            }
        }
    }
}

/// Failures of the offline `normalize` command.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bundle must be a JSON object")]
    NotAnObject,
}
