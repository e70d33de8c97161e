//! Request layer error types

use std::backtrace::Backtrace;
use std::sync::Arc;

/// HTTP status code the API uses for locked resources.
pub const LOCKED_STATUS_CODE: u16 = 423;

/// Error code the request layer attaches to failed HTTP responses.
pub const REQUEST_ERROR_CODE: &str = "ResinRequestError";

/// Shape of a generic "not found" response from the request layer.
pub const NOT_FOUND_RESPONSE: ResponseShape = ResponseShape {
    code: REQUEST_ERROR_CODE,
    status_code: 404,
};

/// A failure descriptor matched against request errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseShape {
    /// Error kind reported by the request layer.
    pub code: &'static str,
    /// HTTP status code.
    pub status_code: u16,
}

impl ResponseShape {
    /// Returns `true` if the error has this shape.
    pub fn matches(&self, err: &RequestError) -> bool {
        err.code == self.code && err.status_code == self.status_code
    }
}

/// A failure reported by the underlying HTTP request layer.
///
/// The backtrace is captured on construction and shared with any error
/// this one is re-typed into.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code} ({status_code}): {message}")]
pub struct RequestError {
    /// Error kind (e.g., "ResinRequestError").
    pub code: String,
    /// HTTP status code of the failed response.
    pub status_code: u16,
    /// Error message from the response body.
    pub message: String,
    trace: Arc<Backtrace>,
}

impl RequestError {
    /// Creates a new request error, capturing the current backtrace.
    pub fn new(code: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            status_code,
            message: message.into(),
            trace: Arc::new(Backtrace::capture()),
        }
    }

    /// Creates an HTTP error with the standard request error code.
    pub fn http(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(REQUEST_ERROR_CODE, status_code, message)
    }

    /// Creates a "not found" error matching [`NOT_FOUND_RESPONSE`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::http(NOT_FOUND_RESPONSE.status_code, message)
    }

    /// Returns the backtrace captured when this error was created.
    pub fn trace(&self) -> &Backtrace {
        &self.trace
    }

    pub(crate) fn shared_trace(&self) -> Arc<Backtrace> {
        Arc::clone(&self.trace)
    }

    /// Returns `true` if this is a generic "not found" response.
    pub fn is_not_found(&self) -> bool {
        NOT_FOUND_RESPONSE.matches(self)
    }

    /// Returns `true` if the resource is locked (HTTP 423).
    pub fn is_locked(&self) -> bool {
        self.status_code == LOCKED_STATUS_CODE
    }
}
