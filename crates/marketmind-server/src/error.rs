// Mapping from request and upstream failures to HTTP error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

use marketmind_core::protocol::ErrorBody;
use marketmind_llm::ServiceError;

/// Every way a request can fail. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, malformed, or not matching the request schema. Raised
    /// before any prompt is built.
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    /// The upstream generation call failed.
    #[error(transparent)]
    Upstream(#[from] ServiceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { status, .. } => *status,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Validation { message, .. } = &self {
            warn!(%status, "rejected request: {message}");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_maps_to_500_with_wrapped_message() {
        let err = ApiError::from(ServiceError::new("quota exceeded"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Gemini API error: quota exceeded");
    }

    #[test]
    fn validation_error_keeps_its_status() {
        let err = ApiError::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `industry`".into(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "missing field `industry`");
    }
}
