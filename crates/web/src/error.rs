use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

use crate::dispatch::ACTIONS;
use crate::response::PrettyJson;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    /// A parameter the action needs was absent or empty
    MissingParameter(&'static str),
    UnknownAction,
    /// The addressed entity does not exist; carries the client message
    NotFound(&'static str),
    Storage(StorageError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter(msg) => write!(f, "Bad request: {}", msg),
            Self::UnknownAction => write!(f, "Bad request: Unknown action"),
            Self::NotFound(msg) => write!(f, "{}", msg),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::MissingParameter(_) | Self::UnknownAction => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::MissingParameter(msg) => json!({
                "error": msg
            }),
            Self::UnknownAction => json!({
                "error": "Unknown action",
                "available_actions": ACTIONS
            }),
            Self::NotFound(msg) => json!({
                "error": msg
            }),
            Self::Storage(StorageError::NotFound) => json!({
                "error": "Resource not found"
            }),
            Self::Storage(e) if e.is_connection_failure() => {
                tracing::error!("Database connection failed: {:?}", e);
                json!({
                    "error": "Database connection failed",
                    "message": e.detail()
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": e.detail()
                })
            }
        };

        (status_code, PrettyJson(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

/// Maps a store miss to a 404 carrying `message`, passing other errors on.
pub fn not_found(message: &'static str) -> impl FnOnce(StorageError) -> WebError {
    move |error| match error {
        StorageError::NotFound => WebError::NotFound(message),
        other => WebError::Storage(other),
    }
}

pub type WebResult<T> = Result<T, WebError>;
