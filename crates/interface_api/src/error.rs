//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use core_kernel::PortError;
use domain_claims::demo::FAILURE_MESSAGE;
use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    /// Demo processing failed; the body always carries the static banner text
    #[error("Processing failed")]
    ProcessingFailed,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details).filter(|d| !d.is_empty()),
            ),
            ApiError::ProcessingFailed => (
                StatusCode::BAD_GATEWAY,
                "processing_failed",
                FAILURE_MESSAGE.to_string(),
                None,
            ),
            ApiError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg, None)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::ClaimNotFound(id) => ApiError::NotFound(format!("Claim {} not found", id)),
            ClaimError::InvalidSubmission(_) | ClaimError::UnsupportedAttachment(_) => {
                ApiError::validation(err.to_string())
            }
            ClaimError::UnknownSortField(_) | ClaimError::UnknownFilter(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ClaimError::ProcessingFailed(_) => ApiError::ProcessingFailed,
            ClaimError::Port(port) => port.into(),
            ClaimError::Money(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ClaimError::from(err).into(),
            PortError::ServiceUnavailable { .. } => ApiError::ServiceUnavailable(err.to_string()),
            PortError::Internal { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        details.sort();

        ApiError::Validation {
            message: "Submission failed validation".to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_errors_map_to_status() {
        let cases = [
            (ClaimError::ClaimNotFound("CLM-9".into()), StatusCode::NOT_FOUND),
            (ClaimError::UnknownSortField("channel".into()), StatusCode::BAD_REQUEST),
            (ClaimError::UnsupportedAttachment("a.txt".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ClaimError::ProcessingFailed("boom".into()), StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_port_unavailable_is_503() {
        let err = ApiError::from(PortError::ServiceUnavailable { service: "catalog".into() });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
