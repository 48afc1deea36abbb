//! Binary-file translation for the HTTP/JSON gateway

use bytes::Bytes;
use http::header::{self, HeaderValue};
use http::Response;

use crate::rpckit::v1::BinaryFile;

const OCTET_STREAM: &str = "application/octet-stream";

/// Render a binary file as an HTTP download response.
///
/// The content type comes from the file itself, falling back to
/// `application/octet-stream` when it is empty or not a valid header
/// value. A non-empty file name is surfaced through the content
/// disposition.
pub fn binary_file_response(file: &BinaryFile) -> Response<Bytes> {
    let mut response = Response::new(Bytes::from(file.data.clone()));

    let content_type = HeaderValue::from_str(&file.content_type)
        .ok()
        .filter(|_| !file.content_type.is_empty())
        .unwrap_or_else(|| HeaderValue::from_static(OCTET_STREAM));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);

    if let Some(disposition) = content_disposition(&file.file_name) {
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, disposition);
    }

    response
}

fn content_disposition(file_name: &str) -> Option<HeaderValue> {
    if file_name.is_empty() {
        return None;
    }
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name)).ok()
}
