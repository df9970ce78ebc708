//! API errors and the JSON envelope every error response shares
//!
//! ```json
//! {
//!   "error": { "code": "VALIDATION_ERROR", "message": "...", "statusCode": 400, "stack": "..." },
//!   "timestamp": "2025-05-28T10:00:00.000Z",
//!   "path": "/api/search",
//!   "method": "GET"
//! }
//! ```
//!
//! `stack` is left out in production.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Route not found: {path}")]
    RouteNotFound { path: String },

    /// `detail` carries the underlying failure for non-production responses
    #[error("{message}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Debug rendering of the failure, reported as `stack`
    pub fn stack(&self) -> String {
        match self {
            ApiError::Internal { detail, .. } => detail.clone(),
            other => format!("{other:?}"),
        }
    }
}

impl From<topicfeed_core::Error> for ApiError {
    fn from(err: topicfeed_core::Error) -> Self {
        ApiError::internal(err.to_string(), format!("{err:?}"))
    }
}

/// Only tags the response; the envelope middleware renders the body
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.status().into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
    pub timestamp: String,
    pub path: String,
    pub method: String,
}

impl ErrorEnvelope {
    pub fn new(err: &ApiError, path: &str, method: &Method, production: bool) -> Self {
        Self {
            error: ErrorBody {
                code: err.code().to_string(),
                message: err.to_string(),
                status_code: err.status().as_u16(),
                stack: (!production).then(|| err.stack()),
            },
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: path.to_string(),
            method: method.to_string(),
        }
    }
}
