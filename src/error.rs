//! Typed handler failures
//!
//! Handlers never build error responses themselves; they return a
//! `HandlerError` and the router converts it to HTTP in one place.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use thiserror::Error;

use crate::http::response::json_response;

/// Every way a request can fail, mapped to exactly one HTTP shape.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Client input error, surfaced as 400 `{error}`.
    #[error("{0}")]
    BadRequest(String),
    /// Unknown resource or route, surfaced as 404 `{error}`.
    #[error("{0}")]
    NotFound(String),
    /// Unexpected internal fault, surfaced as 500 `{error}`.
    #[error("{0}")]
    Internal(String),
    /// Health-check fault, surfaced as 500 `{status, error}`.
    #[error("{0}")]
    Unhealthy(String),
}

impl HandlerError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Unhealthy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The single error-to-HTTP translation point.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let status = self.status();
        let body = match &self {
            Self::Unhealthy(message) => serde_json::json!({
                "status": "unhealthy",
                "error": message,
            }),
            Self::BadRequest(message) | Self::NotFound(message) | Self::Internal(message) => {
                serde_json::json!({ "error": message })
            }
        };
        json_response(status, &body)
    }
}
