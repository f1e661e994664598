use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use blogly_db::StoreError;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    /// A required form field was blank. Handlers that own a form catch this
    /// and re-render it; anywhere else it becomes a 400.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // A miss ends the request by sending the visitor back to the list
            // the missing entity would have appeared in.
            AppError::Store(StoreError::NotFound { kind, id }) => {
                warn!("{} {} not found, redirecting to {}", kind, id, kind.list_path());
                Redirect::to(kind.list_path()).into_response()
            }
            AppError::Store(StoreError::ConstraintViolation(message)) => {
                warn!("Rejected write: {}", message);
                (StatusCode::CONFLICT, format!("Rejected: {}", message)).into_response()
            }
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
