//! RpcKit: transport adaptation helpers for gRPC services with an HTTP/JSON gateway
//!
//! This library adapts a service exposed over both transports: request
//! metadata becomes a per-call context, binary-file responses are encoded
//! for either transport, and errors reach HTTP clients with the same
//! semantics native RPC clients observe.

pub mod error;
pub mod context;

pub mod grpc;
pub mod http;

// Re-exports
pub use context::RequestContext;
pub use error::{Result, RpcError};

// Generated protobuf modules
pub mod rpckit {
    pub mod v1 {
        tonic::include_proto!("rpckit.v1");
    }
}

/// RpcKit library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
