//! Error translation for the HTTP/JSON gateway

use bytes::Bytes;
use http::header::{self, HeaderValue};
use http::{HeaderMap, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tonic::Code;
use tracing::warn;

use crate::error::RpcError;

/// Content type of every gateway error response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// Translate an error value into the HTTP response sent to the client.
///
/// The content type is always [`JSON_CONTENT_TYPE`]. Status and body are
/// chosen by an ordered chain of checks, first match deciding both:
///
/// 1. [`HttpError`] — its headers are copied onto the response (first
///    value per key), its explicit status is used, and its payload is the
///    body. An explicit status always wins over the code mapping below.
/// 2. [`RpcError`] — the status comes from [`http_status_from_code`]; the
///    body is the first detail payload encoded verbatim, or
///    `{"message": <message>}` when there are no details.
/// 3. [`tonic::Status`] — as above, with a `{"message": ...}` body.
/// 4. Anything else — status 500 and `{"message": <Display output>}`.
///
/// The encoder always produces a response: a failed body encoding is
/// degraded to an empty body, and an explicit status outside the
/// representable range falls back to 500.
pub fn encode_error(err: &(dyn std::error::Error + 'static)) -> Response<Bytes> {
    let mut response = Response::new(Bytes::new());
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );

    if let Some(http_err) = err.downcast_ref::<HttpError>() {
        for name in http_err.headers().keys() {
            if let Some(value) = http_err.headers().get(name) {
                response.headers_mut().insert(name.clone(), value.clone());
            }
        }
        *response.status_mut() = match StatusCode::from_u16(http_err.status()) {
            Ok(status) => status,
            Err(_) => {
                warn!(
                    "status {} cannot be sent on the wire, falling back to 500",
                    http_err.status()
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        *response.body_mut() = marshal_json(http_err.payload());
        return response;
    }

    if let Some(rpc_err) = err.downcast_ref::<RpcError>() {
        *response.status_mut() = http_status_from_code(rpc_err.code());
        *response.body_mut() = match rpc_err.details().first() {
            Some(detail) => marshal_json(detail),
            None => message_body(rpc_err.message()),
        };
        return response;
    }

    if let Some(status) = err.downcast_ref::<tonic::Status>() {
        *response.status_mut() = http_status_from_code(status.code());
        *response.body_mut() = message_body(status.message());
        return response;
    }

    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    *response.body_mut() = message_body(&err.to_string());
    response
}

fn marshal_json<T: Serialize>(value: &T) -> Bytes {
    match serde_json::to_vec(value) {
        Ok(body) => Bytes::from(body),
        Err(e) => {
            warn!("failed to encode error body: {}", e);
            Bytes::new()
        }
    }
}

fn message_body(message: &str) -> Bytes {
    marshal_json(&ErrorBody { message })
}

/// User-defined error with an explicit HTTP status.
///
/// `HttpError` bypasses the default code mapping of [`encode_error`]: the
/// response uses the given status, the payload encoded as JSON, and any
/// attached headers. The status is taken as-is; out-of-range values are
/// the caller's responsibility and degrade to 500 at encode time.
///
/// The `Display` output is the fixed placeholder `"HttpError"` — the
/// payload is only ever surfaced through its JSON encoding.
#[derive(Error, Debug, Clone)]
#[error("HttpError")]
pub struct HttpError {
    status: u16,
    payload: Value,
    headers: HeaderMap,
}

impl HttpError {
    /// Create an error with the given status and response payload
    pub fn new(status: u16, payload: Value) -> Self {
        HttpError {
            status,
            payload,
            headers: HeaderMap::new(),
        }
    }

    /// Attach headers appended to the response before it is sent
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Explicit response status
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response payload, serialized as the JSON body
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Headers applied to the response
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Convert a gRPC outcome code into the corresponding HTTP response status.
///
/// Total over [`Code`]; raw integers outside the enumeration normalize to
/// [`Code::Unknown`] through `Code::from` and therefore to 500.
/// See: <https://github.com/googleapis/googleapis/blob/master/google/rpc/code.proto>
pub fn http_status_from_code(code: Code) -> StatusCode {
    match code {
        Code::Ok => StatusCode::OK,
        Code::Cancelled => StatusCode::REQUEST_TIMEOUT,
        Code::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
        // Deliberately not the similarly named '412 Precondition Failed',
        // which implies a conditional-request mismatch.
        Code::FailedPrecondition => StatusCode::BAD_REQUEST,
        Code::Aborted => StatusCode::CONFLICT,
        Code::OutOfRange => StatusCode::BAD_REQUEST,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
    }
}
