use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

/// Body message for every server-side failure ("data was not read").
pub const DATA_NOT_READ: &str = "Məlumat oxunmadı";
/// Body message for a product lookup miss ("product not found").
pub const PRODUCT_NOT_FOUND: &str = "Məhsul tapılmadı";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// Carries the message shown to the caller.
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SourceUnavailable { .. } | AppError::MalformedData { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// What the caller sees. Server-side details stay in the logs.
    fn public_message(&self) -> &str {
        match self {
            AppError::SourceUnavailable { .. } | AppError::MalformedData { .. } => DATA_NOT_READ,
            AppError::NotFound(message) => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            debug!(error = %self, "Request rejected");
        }
        (
            status,
            Json(serde_json::json!({ "message": self.public_message() })),
        )
            .into_response()
    }
}
