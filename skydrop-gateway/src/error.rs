use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use skydrop_core::msg::ErrorResponse;

/// Boundary error taxonomy. Every variant maps to exactly one status code
/// and a uniform `{ "error": … }` body; internal detail stays in the logs.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    /// Credential or token mismatch. Deliberately unspecific: which
    /// factor failed is never reported.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MissingField { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
