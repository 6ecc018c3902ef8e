//! Thumbnail delivery.
//!
//! Thumbnails are rendered from the stored original on first request and
//! cached in the media storage under `CACHE/thumbnails/`.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use kennel_core::attachments::thumbnail_path;
use kennel_core::error::CoreError;
use kennel_core::imaging::render_thumbnail;
use kennel_core::types::DbId;
use kennel_db::repositories::AttachmentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::attachment::parse_kind;
use crate::state::AppState;

/// GET /api/v1/media/thumbnails/{kind}/{id}
pub async fn thumbnail(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<Response> {
    let kind = parse_kind(&kind)?;
    let attachment = AttachmentRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id(kind.entity(), id))?;

    let edge = kind.thumbnail_edge();
    let cached = thumbnail_path(&attachment.image, edge);
    let storage = state.storage.as_ref();

    let data = if storage.exists(&cached).await? {
        storage.read(&cached).await?
    } else {
        let original = storage.read(&attachment.image).await?;
        let rendered = tokio::task::spawn_blocking(move || render_thumbnail(&original, edge))
            .await
            .map_err(|e| AppError::InternalError(format!("Thumbnail task failed: {e}")))??;
        storage.save(&cached, &rendered).await?;
        tracing::debug!(attachment_id = id, kind = %kind, path = %cached, "Thumbnail cached");
        rendered
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/webp")
        .header(header::CONTENT_LENGTH, data.len().to_string())
        .header(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=86400"),
        )
        .body(Body::from(data))
        .map_err(|e| AppError::InternalError(e.to_string()))
}
