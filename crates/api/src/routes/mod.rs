pub mod admin;
pub mod blog;
pub mod catalog;
pub mod health;
pub mod info;
pub mod media;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                               landing page
///
/// /news, /news/{slug}                             news
/// /articles, /articles/{slug}                     articles (?sort=)
///
/// /puppies                                        puppies (?gender=&status=)
/// /puppies/archive                                sold/reserved puppies (?gender=)
/// /adults                                         adults (?gender=)
/// /dogs/{slug}                                    dog detail
/// /litters, /litters/{slug}                       litters
///
/// /faq                                            FAQ
/// /about                                          about page
///
/// /media/thumbnails/{kind}/{id}                   cached WEBP thumbnail
///
/// /admin/...                                      content management
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .merge(blog::router())
        .merge(catalog::router())
        .merge(info::router())
        .nest("/media", media::router())
        .nest("/admin", admin::router())
}
