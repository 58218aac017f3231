use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::debug;

/// Errors the HTTP layer reports back to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::BadRequest(detail) | ApiError::NotFound(detail) => detail,
        };
        debug!(status = %self.status_code(), %detail, "request rejected");

        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
