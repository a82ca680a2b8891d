//! Structured error types for hyperplanner-core.
//!
//! Uses `thiserror` so the server and CLI can match on kinds.
//! Binary crates (hyperplanner-cli) wrap these with `anyhow` context.

use thiserror::Error;

/// Malformed input. Always the caller's fault.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric attribute did not parse as a decimal number
    #[error("{field}: malformed numeric literal '{value}'")]
    MalformedNumber { field: &'static str, value: String },

    /// Percent-decoding produced invalid UTF-8
    #[error("{field}: invalid percent-encoding in '{value}'")]
    MalformedEncoding { field: &'static str, value: String },

    /// Operation arguments had the wrong shape
    #[error("invalid arguments for {operation}: {reason}")]
    InvalidArguments {
        operation: &'static str,
        reason: String,
    },

    /// Bulk submission body was not a course list
    #[error("invalid request body: {reason}")]
    InvalidBody { reason: String },
}

/// Failure reported by the underlying document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not reach or talk to the store
    #[error("store unavailable: {0}")]
    Connection(String),

    /// Bulk insert failed. `inserted` is how many documents are known to
    /// have committed before the failure, when the store reports it.
    #[error("insert failed: {message}")]
    Write {
        inserted: Option<usize>,
        message: String,
    },

    /// Query could not be executed
    #[error("read failed: {0}")]
    Read(String),

    /// A stored document did not decode into a course
    #[error("decode failed: {0}")]
    Decode(String),
}

impl StoreError {
    /// Documents committed before a failed insert, if known.
    pub fn inserted(&self) -> Option<usize> {
        match self {
            Self::Write { inserted, .. } => *inserted,
            _ => None,
        }
    }
}

/// Who is at fault for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; retrying the same request will fail again
    Client,
    /// Store failure; the request may succeed later
    Server,
}

/// Top-level error for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Client,
            Self::Storage(_) => ErrorKind::Server,
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MalformedNumber {
            field: "credits",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "credits: malformed numeric literal 'abc'");

        let err = CatalogError::from(StoreError::Connection("timed out".into()));
        assert_eq!(err.to_string(), "store unavailable: timed out");
    }

    #[test]
    fn kinds_split_client_from_server() {
        let validation = CatalogError::from(ValidationError::InvalidBody {
            reason: "eof".into(),
        });
        assert_eq!(validation.kind(), ErrorKind::Client);

        let storage = CatalogError::from(StoreError::Read("cursor killed".into()));
        assert_eq!(storage.kind(), ErrorKind::Server);
    }

    #[test]
    fn partial_insert_count() {
        let err = StoreError::Write {
            inserted: Some(2),
            message: "duplicate key".into(),
        };
        assert_eq!(err.inserted(), Some(2));
        assert_eq!(StoreError::Read("x".into()).inserted(), None);
    }
}
