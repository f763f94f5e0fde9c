//! Core error handling module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Client-visible error taxonomy. Every variant renders as
/// `{"message": string}`, the wire contract of the original service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or mismatched bearer token.
    Unauthorized,
    /// No product with the requested id.
    NotFound,
    /// A handler-level presence check failed.
    Validation(&'static str),
    /// Unexpected fault; detail stays server-side.
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::FORBIDDEN, "Unauthorized access"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = ErrorBody {
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
