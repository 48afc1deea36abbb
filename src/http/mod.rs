//! HTTP/JSON gateway transport helpers
//!
//! This module renders service outcomes for HTTP clients:
//! - `error`: translation of error values into HTTP status, headers and a
//!   JSON body, with the same semantics native RPC clients observe
//! - `fileserve`: translation of binary-file payloads into HTTP responses

pub mod error;
pub mod fileserve;

pub use error::{encode_error, http_status_from_code, HttpError, JSON_CONTENT_TYPE};
pub use fileserve::binary_file_response;
