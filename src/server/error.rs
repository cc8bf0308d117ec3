//! Error taxonomy of the API and the fixed JSON bodies it renders to.
//!
//! Causes are kept for logging only, response bodies never include them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::telemetry::API_ERRORS;

pub type ApiResponse<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("method failure: {0}")]
    MethodNotAllowed(String),
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Storage failure surfaced as 405, the mapping clients of creation and search rely on.
    pub fn method_failure(err: sqlx::Error) -> Self {
        Self::MethodNotAllowed(err.to_string())
    }

    pub fn unprocessable(err: sqlx::Error) -> Self {
        Self::Unprocessable(err.to_string())
    }

    pub fn internal(err: sqlx::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(reason) => {
                tracing::debug!("Bad request: {reason}");
                json!({
                    "error": 400,
                    "message": "The request cannot be fulfilled due to bad syntax."
                })
            }
            Self::NotFound => json!({
                "success": false,
                "error": 404,
                "message": "The page you are looking for cannot be found."
            }),
            Self::MethodNotAllowed(reason) => {
                tracing::error!("Request failed with 405: {reason}");
                json!({
                    "success": false,
                    "error": 405,
                    "message": "A request was made of a resource using a request method not supported by that resource."
                })
            }
            Self::Unprocessable(reason) => {
                tracing::error!("Request failed with 422: {reason}");
                json!({
                    "error": 422,
                    "message": "Request cannot be processed"
                })
            }
            Self::Internal(reason) => {
                tracing::error!("Request failed with 500: {reason}");
                json!({
                    "error": 500,
                    "message": "The page you are looking for cannot be displayed due to a server problem."
                })
            }
        };
        API_ERRORS.with_label_values(&[status.as_str()]).inc();

        (status, Json(body)).into_response()
    }
}
