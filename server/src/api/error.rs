//! HTTP error mapping. Every error body is `{"detail": "<message>"}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paragon_common::FailureKind;
use serde::Serialize;

use crate::domain::error::TemplateError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// An error response: status plus message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    #[must_use]
    pub fn not_implemented(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_IMPLEMENTED, detail)
    }

    /// Map a failed deployment to its status: caller-side problems are 400,
    /// anything unexpected is 500.
    #[must_use]
    pub fn from_failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        let status = match kind {
            FailureKind::Validation | FailureKind::Cluster => StatusCode::BAD_REQUEST,
            FailureKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, detail)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<TemplateError> for ApiError {
    fn from(e: TemplateError) -> Self {
        let status = match e {
            TemplateError::NotFound(_) | TemplateError::NoMatch(_) => StatusCode::NOT_FOUND,
            TemplateError::AlreadyExists(_) => StatusCode::CONFLICT,
        };
        Self::new(status, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
