//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Listing pages that can
//! be refreshed in place come in two shapes, see [`ListingPage`].

use kennel_core::listing::ResponseShape;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A listing page.
///
/// The full shape carries the page title and the active filters; the partial
/// shape, requested by in-page refreshes, carries only the items.
#[derive(Debug, Serialize)]
pub struct ListingPage<T: Serialize, F: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<F>,
    pub items: Vec<T>,
}

impl<T: Serialize, F: Serialize> ListingPage<T, F> {
    pub fn new(shape: ResponseShape, title: impl Into<String>, filters: F, items: Vec<T>) -> Self {
        match shape {
            ResponseShape::Full => ListingPage {
                page_title: Some(title.into()),
                filters: Some(filters),
                items,
            },
            ResponseShape::Partial => ListingPage {
                page_title: None,
                filters: None,
                items,
            },
        }
    }
}

/// A detail or static page: `{ "page_title": ..., ...payload }`.
///
/// The payload is flattened next to `page_title`, so it must not carry a
/// `page_title` key itself; entity fields such as `title` are left as they are.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub page_title: String,
    #[serde(flatten)]
    pub content: T,
}

/// Payload of a plain list page.
#[derive(Debug, Serialize)]
pub struct Items<T: Serialize> {
    pub items: Vec<T>,
}
