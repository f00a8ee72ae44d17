//! Store failures and their HTTP mapping.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("mapping column {column}: {reason}")]
    Mapping { column: String, reason: String },
    #[error("{op} timed out after {after:?}")]
    Timeout { op: &'static str, after: Duration },
    #[error("database: {0}")]
    Storage(#[source] sqlx::Error),
    #[error("password hashing: {0}")]
    Hashing(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let target = db.constraint().unwrap_or("a unique constraint").to_string();
                StoreError::Conflict(format!("duplicate value violates {}", target))
            }
            sqlx::Error::ColumnNotFound(column) => StoreError::Mapping {
                column,
                reason: "column missing from row".into(),
            },
            sqlx::Error::ColumnDecode { index, source } => StoreError::Mapping {
                column: index,
                reason: source.to_string(),
            },
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => StoreError::Mapping {
                column: index.to_string(),
                reason: format!("row has only {} columns", len),
            },
            sqlx::Error::Decode(source) => StoreError::Mapping {
                column: "<unknown>".into(),
                reason: source.to_string(),
            },
            other => StoreError::Storage(other),
        }
    }
}

/// Error envelope handed to the transport layer.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: u16,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn invalid_id() -> Self {
        Self::bad_request("invalid id")
    }

    pub fn bad_request_data() -> Self {
        Self::bad_request("bad request data")
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        let (status, message) = match &e {
            StoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
            StoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            StoreError::Timeout { .. } => {
                error!(error = %e, "store deadline exceeded");
                (StatusCode::GATEWAY_TIMEOUT, "storage timed out".to_string())
            }
            StoreError::Mapping { .. } | StoreError::Storage(_) | StoreError::Hashing(_) => {
                error!(error = %e, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        if status.is_client_error() {
            warn!(%status, error = %e, "request rejected");
        }
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
            code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}
