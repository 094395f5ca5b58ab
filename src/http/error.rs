use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::order::CreateOrderError;
use crate::domain::product::CreateProductError;

// ============================================================================
// HTTP Error Mapping
// ============================================================================
//
// Validation errors -> 400 with the rule message
// Everything else   -> 500 with a fixed message, no detail leaked
//
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}

impl From<CreateOrderError> for ApiError {
    fn from(err: CreateOrderError) -> Self {
        match err {
            CreateOrderError::Validation(v) => ApiError::BadRequest(v.to_string()),
            CreateOrderError::Persistence => ApiError::Internal,
        }
    }
}

impl From<CreateProductError> for ApiError {
    fn from(err: CreateProductError) -> Self {
        match err {
            CreateProductError::Validation(v) => ApiError::BadRequest(v.to_string()),
            CreateProductError::Persistence => ApiError::Internal,
        }
    }
}

/// Turns unreadable JSON bodies into `400 {message}` instead of actix's plain-text default
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    tracing::warn!(error = %err, "Rejected request body");
    let response = ApiError::BadRequest(err.to_string()).error_response();
    error::InternalError::from_response(err, response).into()
}
