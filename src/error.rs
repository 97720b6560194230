//! Error Types
//!
//! Errors raised while loading the catalog or answering a query, and the
//! mapping from those errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failure while fetching or decoding the upstream catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The upstream API reported an error (first entry of its `errors` list).
    #[error("upstream error {status}: {message}")]
    Upstream { status: u16, message: String },
    /// The request never produced a response body.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body is not the expected JSON document.
    #[error("malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A single cloud entry is missing a field or has a field of the wrong type.
    #[error("invalid cloud record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Internal invariant violated while reordering a result set.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("sorted {actual} clouds but expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Error surfaced at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Propagated as-is from the upstream catalog API.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    /// The combination of parameters is invalid.
    #[error("{message}")]
    BadRequest { message: String },
    /// A parameter (or upstream record) has the wrong shape.
    #[error("{message}")]
    Validation { message: String },
    /// The upstream could not be reached or returned garbage.
    #[error("{message}")]
    BadGateway { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // Upstream statuses outside 100..=999 cannot be represented.
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Upstream { status, message } => Self::Upstream { status, message },
            CatalogError::InvalidRecord { .. } => Self::Validation {
                message: err.to_string(),
            },
            CatalogError::Transport(_) | CatalogError::Malformed(_) => Self::BadGateway {
                message: err.to_string(),
            },
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
