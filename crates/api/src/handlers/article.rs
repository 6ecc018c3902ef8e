//! Handlers for articles: the sortable public list, detail pages with their
//! image galleries, and admin CRUD including the primary image.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::attachments::{upload_path, AttachmentKind, ARTICLE_PRIMARY_DIR};
use kennel_core::content::{validate_body, validate_title};
use kennel_core::error::CoreError;
use kennel_core::listing::{ArticleSort, TITLE_ARTICLES};
use kennel_core::types::DbId;
use kennel_db::models::article::{CreateArticle, UpdateArticle};
use kennel_db::repositories::{ArticleRepo, AttachmentRepo};
use serde::Serialize;

use crate::attachments::{purge_owned, read_upload, remove_media, store_upload};
use crate::error::AppResult;
use crate::extract::Shape;
use crate::query::ArticleListParams;
use crate::response::{DataResponse, ListingPage, Page};
use crate::state::AppState;
use crate::views::{ArticleView, ImageView};

/// Active filters echoed back on the full article list.
#[derive(Debug, Serialize)]
pub struct ArticleFilters {
    pub sort: &'static str,
}

/// GET /api/v1/articles?sort=
///
/// Unknown `sort` values fall back to newest first.
pub async fn list(
    State(state): State<AppState>,
    Shape(shape): Shape,
    Query(params): Query<ArticleListParams>,
) -> AppResult<impl IntoResponse> {
    let sort = ArticleSort::parse(params.sort.as_deref());
    let articles = ArticleRepo::list(&state.pool, sort).await?;
    let items = articles
        .into_iter()
        .map(|a| ArticleView::new(a, state.storage.as_ref()))
        .collect();

    Ok(Json(DataResponse {
        data: ListingPage::new(
            shape,
            TITLE_ARTICLES,
            ArticleFilters {
                sort: sort.as_str(),
            },
            items,
        ),
    }))
}

/// GET /api/v1/articles/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_slug("Article", &slug))?;
    let kind = AttachmentKind::ArticleImage;
    let images = AttachmentRepo::list_by_owner(&state.pool, kind, article.id).await?;

    let storage = state.storage.as_ref();
    Ok(Json(DataResponse {
        data: Page {
            page_title: article.title.clone(),
            content: ArticleView::new(article, storage)
                .with_images(ImageView::list(kind, &images, storage)),
        },
    }))
}

/// POST /api/v1/admin/articles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    validate_title("title", &input.title)?;
    validate_body("content", &input.content)?;

    let article = ArticleRepo::create(&state.pool, &input).await?;
    tracing::info!(article_id = article.id, slug = %article.slug, "Article created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ArticleView::new(article, state.storage.as_ref()),
        }),
    ))
}

/// PUT /api/v1/admin/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title("title", title)?;
    }
    if let Some(content) = &input.content {
        validate_body("content", content)?;
    }

    let article = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Article", id))?;
    tracing::info!(article_id = id, slug = %article.slug, "Article updated");
    Ok(Json(DataResponse {
        data: ArticleView::new(article, state.storage.as_ref()),
    }))
}

/// DELETE /api/v1/admin/articles/{id}
///
/// Gallery images are deleted one by one before the row, then the primary
/// image file.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Article", id))?;

    purge_owned(&state, AttachmentKind::ArticleImage, id).await?;
    if let Some(image) = &article.image {
        remove_media(state.storage.as_ref(), image, None).await?;
    }
    ArticleRepo::delete(&state.pool, id).await?;
    tracing::info!(article_id = id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/articles/{id}/image
///
/// Multipart upload (`file` field) replacing the primary image.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Article", id))?;
    let upload = read_upload(multipart).await?;

    let path = upload_path(ARTICLE_PRIMARY_DIR, id);
    store_upload(state.storage.as_ref(), &path, upload.bytes).await?;
    let article = ArticleRepo::set_image(&state.pool, id, Some(&path))
        .await?
        .ok_or_else(|| CoreError::not_found_id("Article", id))?;

    if let Some(old) = existing.image.as_deref().filter(|old| *old != path) {
        remove_media(state.storage.as_ref(), old, None).await?;
    }
    tracing::info!(article_id = id, path = %path, "Article image replaced");
    Ok(Json(DataResponse {
        data: ArticleView::new(article, state.storage.as_ref()),
    }))
}

/// DELETE /api/v1/admin/articles/{id}/image
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Article", id))?;

    if let Some(old) = &existing.image {
        ArticleRepo::set_image(&state.pool, id, None).await?;
        remove_media(state.storage.as_ref(), old, None).await?;
        tracing::info!(article_id = id, "Article image removed");
    }
    Ok(StatusCode::NO_CONTENT)
}
