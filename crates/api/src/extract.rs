//! Request extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kennel_core::listing::ResponseShape;

/// Header set by in-page (htmx) refreshes of a listing.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// The listing shape a request asks for.
///
/// Any `HX-Request` header selects the partial shape, matching how htmx
/// marks its requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape(pub ResponseShape);

impl<S: Send + Sync> FromRequestParts<S> for Shape {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let partial = parts.headers.contains_key(HX_REQUEST_HEADER);
        Ok(Shape(ResponseShape::from_partial_flag(partial)))
    }
}
