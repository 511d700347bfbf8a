//! Request ID middleware for tracing requests.
//!
//! Every request gets a UUID `x-request-id` header (unless the client sent
//! one), and the id is propagated onto the response.

use http::HeaderName;
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer,
};

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Layer that stamps incoming requests with a UUID request id.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid)
}

/// Layer that copies the request id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}
