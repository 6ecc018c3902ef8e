//! Content management routes, mounted at `/admin`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{article, attachment, dog, faq, litter, news};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /news                               -> news::create
/// PUT    /news/{id}                          -> news::update
/// DELETE /news/{id}                          -> news::delete
/// PUT    /news/{id}/image                    -> news::upload_image (multipart)
/// DELETE /news/{id}/image                    -> news::delete_image
///
/// POST   /articles                           -> article::create
/// PUT    /articles/{id}                      -> article::update
/// DELETE /articles/{id}                      -> article::delete
/// PUT    /articles/{id}/image                -> article::upload_image (multipart)
/// DELETE /articles/{id}/image                -> article::delete_image
///
/// POST   /faqs                               -> faq::create
/// PUT    /faqs/{id}                          -> faq::update
/// DELETE /faqs/{id}                          -> faq::delete
///
/// POST   /dogs                               -> dog::create
/// PUT    /dogs/{id}                          -> dog::update
/// DELETE /dogs/{id}                          -> dog::delete
///
/// POST   /litters                            -> litter::create
/// PUT    /litters/{id}                       -> litter::update
/// DELETE /litters/{id}                       -> litter::delete
///
/// GET    /attachments/{kind}/owners/{owner}  -> attachment::list_by_owner
/// POST   /attachments/{kind}/owners/{owner}  -> attachment::upload (multipart)
/// PUT    /attachments/{kind}/{id}            -> attachment::replace (multipart)
/// DELETE /attachments/{kind}/{id}            -> attachment::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/news", post(news::create))
        .route("/news/{id}", put(news::update).delete(news::delete))
        .route(
            "/news/{id}/image",
            put(news::upload_image).delete(news::delete_image),
        )
        .route("/articles", post(article::create))
        .route("/articles/{id}", put(article::update).delete(article::delete))
        .route(
            "/articles/{id}/image",
            put(article::upload_image).delete(article::delete_image),
        )
        .route("/faqs", post(faq::create))
        .route("/faqs/{id}", put(faq::update).delete(faq::delete))
        .route("/dogs", post(dog::create))
        .route("/dogs/{id}", put(dog::update).delete(dog::delete))
        .route("/litters", post(litter::create))
        .route("/litters/{id}", put(litter::update).delete(litter::delete))
        .route(
            "/attachments/{kind}/owners/{owner_id}",
            get(attachment::list_by_owner).post(attachment::upload),
        )
        .route(
            "/attachments/{kind}/{id}",
            put(attachment::replace).delete(attachment::delete),
        )
}
