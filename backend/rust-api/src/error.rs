//! Error types for the API and the mapping onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Problems with a swap-request body, found before any record is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// Failures of the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no user identity supplied")]
    Unauthenticated,
    #[error("profile store is unavailable")]
    Unavailable,
}

/// Error body returned to clients.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            ApiError::Store(StoreError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(ValidationError::MissingField(_)) => "MISSING_FIELD",
            ApiError::Validation(ValidationError::InvalidField { .. }) => "INVALID_FIELD",
            ApiError::Validation(ValidationError::NotAnObject) | ApiError::MalformedBody(_) => {
                "MALFORMED_BODY"
            }
            ApiError::Store(StoreError::Unauthenticated) => "UNAUTHENTICATED",
            ApiError::Store(StoreError::Unavailable) => "STORE_UNAVAILABLE",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
                code: self.code(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_client_errors() {
        let err = ApiError::from(ValidationError::MissingField("skill_id"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "MISSING_FIELD");
        assert_eq!(err.to_string(), "missing required field `skill_id`");
    }

    #[test]
    fn store_errors_map_to_distinct_statuses() {
        assert_eq!(
            ApiError::from(StoreError::Unauthenticated).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(StoreError::Unavailable).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
