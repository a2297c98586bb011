use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: u16,
    error: String,
}

/// Every failure a handler can report. Store failures collapse into
/// `BadRequest` carrying only the handler context; the cause goes to the log.
#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed,
}

impl ApiError {
    /// Log a store failure with context and return the generic client error.
    pub(crate) fn store(err: sqlx::Error, context: &str) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::BadRequest(context.to_string())
    }

    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

/// Turn a zero affected-row count from an UPDATE or DELETE into a 404.
pub(crate) fn require_affected(
    affected: u64,
    not_found: impl FnOnce() -> String,
) -> Result<(), ApiError> {
    if affected == 0 {
        Err(ApiError::NotFound(not_found()))
    } else {
        Ok(())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) | Self::NotFound(message) => message,
            Self::MethodNotAllowed => "Method not allowed".to_string(),
        };

        (status, Json(ErrorResponse { status: status.as_u16(), error: message })).into_response()
    }
}
