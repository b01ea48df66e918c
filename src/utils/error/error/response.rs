//! HTTP response handling for errors

use super::types::RelayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) | RelayError::Serialization(_) => StatusCode::BAD_REQUEST,
            RelayError::NotFound(_) => StatusCode::NOT_FOUND,
            RelayError::Upstream(_) | RelayError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            RelayError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            RelayError::Database(_) | RelayError::Store(_) => {
                ("DATABASE_ERROR", "Database operation failed".to_string())
            }
            RelayError::HttpClient(_) | RelayError::Upstream(_) => {
                ("UPSTREAM_ERROR", self.to_string())
            }
            RelayError::Serialization(_) => ("PARSING_ERROR", self.to_string()),
            RelayError::Batch(_) => ("BATCH_FAILED", self.to_string()),
            RelayError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            RelayError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
