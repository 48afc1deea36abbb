//! Unified error types for RpcKit

use serde_json::Value;
use thiserror::Error;
use tonic::Code;

/// Unified Result type
pub type Result<T> = std::result::Result<T, RpcError>;

/// An RPC outcome carried by an error value.
///
/// `RpcError` pairs a machine-readable [`Code`] with a human-readable
/// message and an optional ordered list of structured detail payloads.
/// The same value serves both transports: gRPC handlers convert it into a
/// [`tonic::Status`], while the HTTP gateway renders it through
/// [`crate::http::encode_error`].
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct RpcError {
    code: Code,
    message: String,
    details: Vec<Value>,
}

impl RpcError {
    /// Create an error with the given code and message
    pub fn new<S: Into<String>>(code: Code, message: S) -> Self {
        RpcError {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Append a structured detail payload
    ///
    /// Detail payloads are emitted verbatim by the HTTP gateway; the first
    /// one, when present, replaces the default `{"message": ...}` body.
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.details.push(detail);
        self
    }

    /// Machine-readable outcome code
    pub fn code(&self) -> Code {
        self.code
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured detail payloads, in the order they were attached
    pub fn details(&self) -> &[Value] {
        &self.details
    }

    /// Create a bad-request error
    ///
    /// HTTP clients receive it as status 400 with a
    /// `{"message": "<message>"}` body.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::InvalidArgument, message)
    }

    /// Create a not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::NotFound, message)
    }

    /// Create an already-exists error
    pub fn already_exists<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::AlreadyExists, message)
    }

    /// Create a permission-denied error
    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::PermissionDenied, message)
    }

    /// Create an unauthenticated error
    pub fn unauthenticated<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::Unauthenticated, message)
    }

    /// Create a resource-exhausted error
    pub fn resource_exhausted<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::ResourceExhausted, message)
    }

    /// Create a failed-precondition error
    pub fn failed_precondition<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::FailedPrecondition, message)
    }

    /// Create a deadline-exceeded error
    pub fn deadline_exceeded<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::DeadlineExceeded, message)
    }

    /// Create an unimplemented error
    pub fn unimplemented<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::Unimplemented, message)
    }

    /// Create an unavailable error
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::Unavailable, message)
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        RpcError::new(Code::Internal, message)
    }
}

/// Convert RpcError to gRPC Status
impl From<RpcError> for tonic::Status {
    fn from(err: RpcError) -> Self {
        tonic::Status::new(err.code, err.message)
    }
}

/// Convert gRPC Status to RpcError
///
/// Only the code and message survive the conversion; binary protobuf
/// detail payloads attached to the status are not carried over.
impl From<tonic::Status> for RpcError {
    fn from(status: tonic::Status) -> Self {
        RpcError::new(status.code(), status.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructor_codes() {
        assert_eq!(RpcError::not_found("missing").code(), Code::NotFound);
        assert_eq!(
            RpcError::invalid_argument("bad input").code(),
            Code::InvalidArgument
        );
        assert_eq!(RpcError::internal("boom").code(), Code::Internal);
    }

    #[test]
    fn test_display_is_message() {
        let err = RpcError::not_found("user 42 not found");
        assert_eq!(err.to_string(), "user 42 not found");
    }

    #[test]
    fn test_details_preserve_order() {
        let err = RpcError::invalid_argument("bad field")
            .with_detail(json!({"field": "email"}))
            .with_detail(json!({"field": "name"}));
        assert_eq!(err.details().len(), 2);
        assert_eq!(err.details()[0], json!({"field": "email"}));
    }

    #[test]
    fn test_status_round_trip() {
        let status: tonic::Status = RpcError::unauthenticated("no token").into();
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "no token");

        let err: RpcError = status.into();
        assert_eq!(err.code(), Code::Unauthenticated);
        assert_eq!(err.message(), "no token");
    }
}
