use axum::routing::get;
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// ```text
/// GET /faq                  -> faq::list
/// GET /about                -> faq::about
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faq", get(faq::list))
        .route("/about", get(faq::about))
}
