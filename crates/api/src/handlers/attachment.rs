//! Admin handlers for image attachments of articles, dogs and litters.
//!
//! The `{kind}` path segment is one of `article-images`, `dog-images` or
//! `litter-images`.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::attachments::AttachmentKind;
use kennel_core::error::CoreError;
use kennel_core::types::DbId;
use kennel_db::repositories::AttachmentRepo;

use crate::attachments::{
    create_attachment, delete_attachment, read_upload, replace_attachment_image,
};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::ImageView;

/// Resolve a `{kind}` path segment; unknown kinds are a 404.
pub(crate) fn parse_kind(segment: &str) -> AppResult<AttachmentKind> {
    segment.parse::<AttachmentKind>().map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "AttachmentKind",
            key: segment.to_string(),
        })
    })
}

/// GET /api/v1/admin/attachments/{kind}/owners/{owner_id}
pub async fn list_by_owner(
    State(state): State<AppState>,
    Path((kind, owner_id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let attachments = AttachmentRepo::list_by_owner(&state.pool, kind, owner_id).await?;
    Ok(Json(DataResponse {
        data: ImageView::list(kind, &attachments, state.storage.as_ref()),
    }))
}

/// POST /api/v1/admin/attachments/{kind}/owners/{owner_id}
///
/// Multipart upload (`file` field) of a new image.
pub async fn upload(
    State(state): State<AppState>,
    Path((kind, owner_id)): Path<(String, DbId)>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let upload = read_upload(multipart).await?;
    let attachment = create_attachment(&state, kind, owner_id, upload).await?;
    tracing::info!(
        attachment_id = attachment.id,
        owner_id,
        kind = %kind,
        path = %attachment.image,
        "Image uploaded"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ImageView::new(kind, &attachment, state.storage.as_ref()),
        }),
    ))
}

/// PUT /api/v1/admin/attachments/{kind}/{id}
///
/// Multipart upload (`file` field) replacing the image; the previous file
/// is removed.
pub async fn replace(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(&kind)?;
    let upload = read_upload(multipart).await?;
    let attachment = replace_attachment_image(&state, kind, id, upload).await?;
    tracing::info!(attachment_id = id, kind = %kind, path = %attachment.image, "Image replaced");
    Ok(Json(DataResponse {
        data: ImageView::new(kind, &attachment, state.storage.as_ref()),
    }))
}

/// DELETE /api/v1/admin/attachments/{kind}/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let kind = parse_kind(&kind)?;
    let attachment = AttachmentRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id(kind.entity(), id))?;
    delete_attachment(&state, kind, &attachment).await?;
    tracing::info!(attachment_id = id, kind = %kind, "Image deleted");
    Ok(StatusCode::NO_CONTENT)
}
