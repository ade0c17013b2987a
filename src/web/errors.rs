use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::web::models::ErrorDetail;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(detail: &str) -> Self {
        Self::BadRequest(detail.to_string())
    }

    /// Wraps an unexpected failure as `"<context>: <cause>"` and logs it.
    pub fn internal(context: &str, cause: impl std::fmt::Display) -> Self {
        error!("{}: {}", context, cause);
        Self::Internal(format!("{context}: {cause}"))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.to_string(),
        })
    }
}
