//! API error type with IntoResponse
//!
//! Bad input maps to 400, store failures to 502. The body is the error
//! message as plain text. Rejected input deliberately gets its own status
//! instead of sharing 502 with store failures, so clients can tell a bad
//! request from an unavailable catalog.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hyperplanner_core::{CatalogError, ErrorKind, StoreError, ValidationError};

#[derive(Debug)]
pub struct ApiError(CatalogError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Client => StatusCode::BAD_REQUEST,
            ErrorKind::Server => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            CatalogError::Validation(e) => tracing::debug!("rejected request: {}", e),
            CatalogError::Storage(e) => tracing::error!("store error: {}", e),
        }
        (status, self.0.to_string()).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        Self(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self(e.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self(e.into())
    }
}
