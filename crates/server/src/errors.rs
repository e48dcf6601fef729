use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Request failure. Rendered as a bare status with its reason phrase.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Service(ServiceError::Db(_)) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, status.canonical_reason().unwrap_or("error")).into_response()
    }
}
