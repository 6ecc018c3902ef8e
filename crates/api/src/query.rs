//! Query parameter types for the public listing handlers.
//!
//! Everything is kept as raw strings: unknown values degrade to defaults
//! in `kennel_core::listing` instead of rejecting the request.

use serde::Deserialize;

/// `?sort=` for the article list.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub sort: Option<String>,
}

/// `?gender=&status=` for dog listings.
#[derive(Debug, Default, Deserialize)]
pub struct DogListParams {
    pub gender: Option<String>,
    pub status: Option<String>,
}
