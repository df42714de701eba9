//! # HTTP mapping of gateway errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::gateway::GatewayError;

impl GatewayError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidQuery => StatusCode::BAD_REQUEST,
            GatewayError::TransactionInProgress => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::ConnectionUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<GatewayError> for ErrorResponse {
    fn from(err: GatewayError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::QueryError;

    #[test]
    fn test_status_codes() {
        assert_eq!(GatewayError::InvalidQuery.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GatewayError::TransactionInProgress.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::Execution(QueryError::client("x", "SELECT 1")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::ConnectionUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse::from(GatewayError::InvalidQuery);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Invalid query"}));
    }
}
