//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::assets::AssetError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request was well formed but cannot be acted on
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Asset store error
    #[error("Asset store error: {0}")]
    Asset(#[from] AssetError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE"),
            ApiError::Asset(e) => match e {
                AssetError::Config(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "ASSET_STORE_MISCONFIGURED")
                }
                AssetError::Unavailable => {
                    (StatusCode::SERVICE_UNAVAILABLE, "ASSET_STORE_UNAVAILABLE")
                }
                AssetError::Timeout => (StatusCode::GATEWAY_TIMEOUT, "ASSET_STORE_TIMEOUT"),
                AssetError::Request(_) | AssetError::Api { .. } | AssetError::InvalidResponse(_) => {
                    (StatusCode::BAD_GATEWAY, "ASSET_STORE_ERROR")
                }
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_errors_map_to_bad_gateway() {
        let err = ApiError::from(AssetError::Api {
            status: 401,
            message: "Invalid Signature".to_string(),
        });
        assert_eq!(err.status_and_code().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_transport_errors() {
        assert_eq!(
            ApiError::from(AssetError::Unavailable).status_and_code().0,
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(AssetError::Timeout).status_and_code().0,
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Unprocessable("no id".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
