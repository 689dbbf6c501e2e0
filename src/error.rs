/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Error type for every layer of the client
#[derive(Debug, Error)]
pub enum AppError {
    /// Error raised by the underlying `reqwest` client
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport level failure that is not a `reqwest` error (custom transports)
    #[error("connection error: {0}")]
    Connection(String),

    /// The send was cancelled because the caller supplied timeout elapsed
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Token exchange with the authentication endpoint failed
    #[error("authentication failed: {source}")]
    AuthenticationFailed {
        /// What went wrong while talking to the authentication endpoint
        #[source]
        source: Box<AppError>,
    },

    /// Final response carried a status the caller did not expect
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),

    /// Endpoint key has no mapping in the resolver
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Invalid input supplied by the caller
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Wraps any error as the cause of an authentication failure
    pub fn authentication(source: AppError) -> Self {
        AppError::AuthenticationFailed {
            source: Box::new(source),
        }
    }

    /// Whether the error is a transport failure that may succeed if the send is repeated
    ///
    /// Cancellation by the caller's timeout is not transient, and neither is a
    /// request `reqwest` could not even build (a relative URL, for instance).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Http(e) => e.is_connect() || e.is_request() || e.is_timeout() || e.is_body(),
            AppError::Connection(_) => true,
            _ => false,
        }
    }

    /// Whether the error is a timeout, either ours or one reported by `reqwest`
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Timeout(_) => true,
            AppError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status attached to the error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected(status) => Some(*status),
            AppError::Http(e) => e.status(),
            AppError::AuthenticationFailed { source } => source.status_code(),
            _ => None,
        }
    }
}
