use axum::routing::get;
use axum::Router;

use crate::handlers::{article, news};
use crate::state::AppState;

/// Public blog routes.
///
/// ```text
/// GET /news                 -> news::list
/// GET /news/{slug}          -> news::get_by_slug
/// GET /articles             -> article::list (?sort=)
/// GET /articles/{slug}      -> article::get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/news", get(news::list))
        .route("/news/{slug}", get(news::get_by_slug))
        .route("/articles", get(article::list))
        .route("/articles/{slug}", get(article::get_by_slug))
}
