//! HTTP error responses
//!
//! Every failure is rendered as `{ "error", "code", "requestId" }` with a
//! status derived from the error kind.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dsreview_core::{ExError, ExErrorKind, ReviewError};
use dsreview_core_types::RequestId;
use serde::Serialize;

#[derive(Debug)]
pub struct ApiError {
    inner: ExError,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<RequestId>,
}

impl ApiError {
    pub fn with_request_id(self, request_id: RequestId) -> Self {
        Self {
            inner: self.inner.with_request_id(request_id),
        }
    }

    pub fn inner(&self) -> &ExError {
        &self.inner
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.inner.kind())
    }
}

pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::InvalidInput | ExErrorKind::MissingField => StatusCode::BAD_REQUEST,
        ExErrorKind::NotFound => StatusCode::NOT_FOUND,
        ExErrorKind::Io
        | ExErrorKind::Serialization
        | ExErrorKind::Persistence
        | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ExError> for ApiError {
    fn from(inner: ExError) -> Self {
        Self { inner }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self { inner: err.into() }
    }
}

/// Unreadable request bodies are the caller's input error
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            inner: ExError::new(ExErrorKind::InvalidInput)
                .with_op("read_body")
                .with_message(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(err_code = self.inner.code(), error = %self.inner, "request failed");
        } else {
            tracing::debug!(err_code = self.inner.code(), error = %self.inner, "request rejected");
        }

        let message = if self.inner.message().is_empty() {
            self.inner.code().to_string()
        } else {
            self.inner.message().to_string()
        };
        let body = ErrorBody {
            error: message,
            code: self.inner.code(),
            request_id: self.inner.request_id().cloned(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ExErrorKind::MissingField), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ExErrorKind::InvalidInput), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ExErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ExErrorKind::Io), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_review_error_converts() {
        let err = ApiError::from(ReviewError::QuestionNotFound {
            question_id: "q1".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.inner().entity_id(), Some("q1"));
    }
}
