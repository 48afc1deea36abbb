//! Request metadata propagation

use base64::{engine::general_purpose, Engine as _};
use tonic::metadata::{KeyRef, MetadataMap};
use tonic::{Request, Status};
use tracing::warn;

use crate::context::RequestContext;

/// Copy gRPC request metadata into a per-call context.
///
/// For every metadata key with a usable value, the derived context gains
/// one entry keyed by the metadata key, holding the first value only;
/// additional values for the same key are dropped. ASCII values that are
/// not valid UTF-8 are skipped, and binary (`-bin`) values are stored
/// base64-encoded. The input context is not modified.
///
/// Key processing order is unspecified; entries are independent.
pub fn metadata_to_context(ctx: &RequestContext, metadata: &MetadataMap) -> RequestContext {
    let mut ctx = ctx.clone();

    for key in metadata.keys() {
        match key {
            KeyRef::Ascii(key) => {
                if let Some(value) = metadata.get(key.as_str()) {
                    match value.to_str() {
                        Ok(text) => ctx = ctx.with_value(key.as_str(), text),
                        Err(_) => {
                            warn!("skipping metadata key '{}': value is not valid UTF-8", key);
                        }
                    }
                }
            }
            KeyRef::Binary(key) => {
                if let Some(value) = metadata.get_bin(key.as_str()) {
                    match value.to_bytes() {
                        Ok(raw) => {
                            ctx = ctx.with_value(key.as_str(), general_purpose::STANDARD.encode(raw));
                        }
                        Err(_) => {
                            warn!("skipping metadata key '{}': undecodable binary value", key);
                        }
                    }
                }
            }
        }
    }

    ctx
}

/// Interceptor that stores the metadata-derived context in the request.
///
/// Service handlers read it back through the request extensions:
///
/// ```ignore
/// let ctx = request.extensions().get::<RequestContext>();
/// ```
pub fn context_interceptor(mut request: Request<()>) -> Result<Request<()>, Status> {
    let ctx = metadata_to_context(&RequestContext::new(), request.metadata());
    request.extensions_mut().insert(ctx);
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut metadata = MetadataMap::new();
        metadata.insert("user-id", "42".parse().unwrap());
        metadata.append("user-id", "43".parse().unwrap());

        let ctx = metadata_to_context(&RequestContext::new(), &metadata);
        assert_eq!(ctx.get("user-id"), Some("42"));
    }

    #[test]
    fn test_binary_values_are_base64_encoded() {
        let mut metadata = MetadataMap::new();
        metadata.insert_bin(
            "trace-bin",
            tonic::metadata::MetadataValue::from_bytes(&[0x01, 0x02, 0x03]),
        );

        let ctx = metadata_to_context(&RequestContext::new(), &metadata);
        assert_eq!(ctx.get("trace-bin"), Some("AQID"));
    }

    #[test]
    fn test_existing_entries_survive() {
        let mut metadata = MetadataMap::new();
        metadata.insert("tenant", "acme".parse().unwrap());

        let base = RequestContext::new().with_value("request-id", "r-1");
        let ctx = metadata_to_context(&base, &metadata);

        assert_eq!(ctx.get("request-id"), Some("r-1"));
        assert_eq!(ctx.get("tenant"), Some("acme"));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_interceptor_parks_context_in_extensions() {
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert("user-id", "42".parse().unwrap());

        let request = context_interceptor(request).unwrap();
        let ctx = request.extensions().get::<RequestContext>().unwrap();
        assert_eq!(ctx.get("user-id"), Some("42"));
    }
}
