//! Handlers for news items: the public list/detail pages and admin CRUD.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::attachments::{flat_upload_path, NEWS_IMAGE_DIR};
use kennel_core::content::{validate_body, validate_title};
use kennel_core::error::CoreError;
use kennel_core::listing::TITLE_NEWS;
use kennel_core::types::DbId;
use kennel_db::models::news::{CreateNews, UpdateNews};
use kennel_db::repositories::NewsRepo;

use crate::attachments::{read_upload, remove_media, store_upload};
use crate::error::AppResult;
use crate::response::{DataResponse, Items, Page};
use crate::state::AppState;
use crate::views::NewsView;

/// GET /api/v1/news
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::list(&state.pool).await?;
    let items = news
        .into_iter()
        .map(|n| NewsView::new(n, state.storage.as_ref()))
        .collect();
    Ok(Json(DataResponse {
        data: Page {
            page_title: TITLE_NEWS.to_string(),
            content: Items { items },
        },
    }))
}

/// GET /api/v1/news/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_slug("News", &slug))?;
    Ok(Json(DataResponse {
        data: Page {
            page_title: news.title.clone(),
            content: NewsView::new(news, state.storage.as_ref()),
        },
    }))
}

/// POST /api/v1/admin/news
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNews>,
) -> AppResult<impl IntoResponse> {
    validate_title("title", &input.title)?;
    validate_body("content", &input.content)?;

    let news = NewsRepo::create(&state.pool, &input).await?;
    tracing::info!(news_id = news.id, slug = %news.slug, "News created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: NewsView::new(news, state.storage.as_ref()),
        }),
    ))
}

/// PUT /api/v1/admin/news/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNews>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title("title", title)?;
    }
    if let Some(content) = &input.content {
        validate_body("content", content)?;
    }

    let news = NewsRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_id("News", id))?;
    tracing::info!(news_id = id, "News updated");
    Ok(Json(DataResponse {
        data: NewsView::new(news, state.storage.as_ref()),
    }))
}

/// DELETE /api/v1/admin/news/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let news = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("News", id))?;

    if let Some(image) = &news.image {
        remove_media(state.storage.as_ref(), image, None).await?;
    }
    NewsRepo::delete(&state.pool, id).await?;
    tracing::info!(news_id = id, "News deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/news/{id}/image
///
/// Multipart upload (`file` field) replacing the illustration.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("News", id))?;
    let upload = read_upload(multipart).await?;

    let path = flat_upload_path(NEWS_IMAGE_DIR);
    store_upload(state.storage.as_ref(), &path, upload.bytes).await?;
    let news = NewsRepo::set_image(&state.pool, id, Some(&path))
        .await?
        .ok_or_else(|| CoreError::not_found_id("News", id))?;

    if let Some(old) = existing.image.as_deref().filter(|old| *old != path) {
        remove_media(state.storage.as_ref(), old, None).await?;
    }
    tracing::info!(news_id = id, path = %path, "News image replaced");
    Ok(Json(DataResponse {
        data: NewsView::new(news, state.storage.as_ref()),
    }))
}

/// DELETE /api/v1/admin/news/{id}/image
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id("News", id))?;

    if let Some(old) = &existing.image {
        NewsRepo::set_image(&state.pool, id, None).await?;
        remove_media(state.storage.as_ref(), old, None).await?;
        tracing::info!(news_id = id, "News image removed");
    }
    Ok(StatusCode::NO_CONTENT)
}
