//! gRPC-side transport helpers
//!
//! This module adapts incoming gRPC requests for the service layer:
//! - `metadata`: propagation of request metadata into a per-call
//!   [`RequestContext`](crate::context::RequestContext)
//! - `fileserve`: response encoding for binary-file payloads

pub mod fileserve;
pub mod metadata;

pub use fileserve::encode_binary_file;
pub use metadata::{context_interceptor, metadata_to_context};
