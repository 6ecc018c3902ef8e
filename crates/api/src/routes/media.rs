use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// GET /thumbnails/{kind}/{id}   -> media::thumbnail
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/thumbnails/{kind}/{id}", get(media::thumbnail))
}
