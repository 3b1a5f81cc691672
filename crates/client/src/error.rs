//! Error types for petstore API operations.
//!
//! Only two kinds of failure exist for a verification client: the request
//! could not be exchanged at all, or the service answered with something the
//! operation does not accept. Both carry enough context to name the failing
//! operation in test output.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Transport` | Request could not be sent or the body could not be read |
//! | `InvalidBaseUrl` | Configured base URL is unusable |
//! | `NotFound` | Service answered 404 for the addressed pet |
//! | `UnexpectedStatus` | Status outside what the operation accepts |
//! | `Decode` | Response body did not match the expected JSON shape |

use thiserror::Error;

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// The primary error type for petstore API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("transport error during {operation}: {source}")]
    Transport {
        /// The operation being performed (e.g. "create").
        operation: &'static str,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL is not a usable HTTP(S) URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The service answered 404 for the addressed pet.
    #[error("pet {id} not found")]
    NotFound {
        /// The pet id that was addressed.
        id: i64,
    },

    /// The service answered with a status the operation does not accept.
    #[error("{operation} returned unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The operation being performed.
        operation: &'static str,
        /// The HTTP status code received.
        status: u16,
        /// The response body, verbatim.
        body: String,
    },

    /// The response body did not decode as the expected JSON shape.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        /// The operation being performed.
        operation: &'static str,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Whether this error is a not-found answer from the service.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// The HTTP status the service answered with, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
