use axum::routing::get;
use axum::Router;

use crate::handlers::{dog, litter};
use crate::state::AppState;

/// Public catalog routes.
///
/// ```text
/// GET /puppies              -> dog::list_puppies (?gender=&status=)
/// GET /puppies/archive      -> dog::list_archive (?gender=)
/// GET /adults               -> dog::list_adults (?gender=)
/// GET /dogs/{slug}          -> dog::get_by_slug
/// GET /litters              -> litter::list
/// GET /litters/{slug}       -> litter::get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/puppies", get(dog::list_puppies))
        .route("/puppies/archive", get(dog::list_archive))
        .route("/adults", get(dog::list_adults))
        .route("/dogs/{slug}", get(dog::get_by_slug))
        .route("/litters", get(litter::list))
        .route("/litters/{slug}", get(litter::get_by_slug))
}
