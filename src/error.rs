//! Errors raised by the registry and the request layer.
//!
//! The storage unit itself never fails. Everything that can go wrong is a
//! bad request field, a name clash or a missing warehouse, and each of
//! those maps onto one [`GatewayError`] variant with a stable numeric code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON envelope for every non-2xx API answer.
///
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "capacity must be a number: \"abc\"",
///     "details": "field: capacity"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Code, message and optional details.
    pub error: ErrorBody,
}

/// Body of an [`ErrorResponse`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Stable numeric code, see [`GatewayError::error_code`].
    pub code: u32,
    /// Display text of the error.
    pub message: String,
    /// Extra context such as the offending field. Omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Everything a gateway operation can fail with.
///
/// Codes `1xxx` are bad input (400), `2xxx` are registry state (404 for a
/// missing warehouse, 409 for a taken name) and `3xxx` are server faults
/// (500).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// A numeric field could not be parsed as a finite number.
    #[error("{field} must be a number: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw text as received.
        value: String,
    },

    /// Request validation failed for another reason.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The warehouse name was empty after trimming.
    #[error("name is required")]
    NameRequired,

    /// Warehouse with the given name was not found.
    #[error("warehouse not found: {0}")]
    WarehouseNotFound(String),

    /// A warehouse with the given name already exists.
    #[error("a warehouse named {0:?} already exists")]
    DuplicateName(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidNumber { .. } => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::NameRequired => 1003,
            Self::WarehouseNotFound(_) => 2001,
            Self::DuplicateName(_) => 2002,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidNumber { .. } | Self::InvalidRequest(_) | Self::NameRequired => {
                StatusCode::BAD_REQUEST
            }
            Self::WarehouseNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateName(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let details = match &self {
            Self::InvalidNumber { field, .. } => Some(format!("field: {field}")),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_by_category() {
        let invalid = GatewayError::InvalidNumber {
            field: "amount",
            value: "abc".to_string(),
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(GatewayError::NameRequired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            GatewayError::WarehouseNotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::DuplicateName("x".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            GatewayError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_codes_are_distinct() {
        let codes = [
            GatewayError::InvalidNumber {
                field: "amount",
                value: String::new(),
            }
            .error_code(),
            GatewayError::InvalidRequest(String::new()).error_code(),
            GatewayError::NameRequired.error_code(),
            GatewayError::WarehouseNotFound(String::new()).error_code(),
            GatewayError::DuplicateName(String::new()).error_code(),
            GatewayError::Internal(String::new()).error_code(),
        ];
        let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn invalid_number_message_names_field() {
        let err = GatewayError::InvalidNumber {
            field: "capacity",
            value: "lots".to_string(),
        };
        assert_eq!(err.to_string(), "capacity must be a number: \"lots\"");
    }

    #[test]
    fn into_response_sets_status() {
        let response = GatewayError::DuplicateName("Main".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
