//! Binary-file response encoding for the gRPC transport

use tonic::Response;

use crate::rpckit::v1::BinaryFile;

/// Wrap a binary file in a gRPC response.
///
/// The file travels unchanged over the binary transport; the HTTP gateway
/// renders the same message through
/// [`binary_file_response`](crate::http::binary_file_response).
pub fn encode_binary_file(file: BinaryFile) -> Response<BinaryFile> {
    Response::new(file)
}
