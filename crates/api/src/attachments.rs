//! Image attachment lifecycle.
//!
//! Every stored image goes through [`store_upload`] (resize + JPEG re-encode)
//! and every removal through [`remove_media`], so the file on disk and its
//! cached thumbnail disappear together with the row that referenced them.
//! A file that is already missing is ignored; any other storage error fails
//! the operation.

use axum::extract::Multipart;
use kennel_core::attachments::{thumbnail_path, upload_path, AttachmentKind};
use kennel_core::error::CoreError;
use kennel_core::imaging::process_original;
use kennel_core::storage::MediaStorage;
use kennel_core::types::DbId;
use kennel_db::models::attachment::Attachment;
use kennel_db::repositories::AttachmentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A file received in a multipart `file` field. The client's file name is
/// not kept: stored originals are always renamed to `<hex>.jpg`.
#[derive(Debug)]
pub struct Upload {
    pub bytes: Vec<u8>,
}

/// Read the `file` field of a multipart upload. Other fields are ignored.
pub async fn read_upload(mut multipart: Multipart) -> AppResult<Upload> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some(Upload {
            bytes: data.to_vec(),
        });
    }

    let upload = upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    if upload.bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    Ok(upload)
}

/// Normalize an uploaded image and write it to `path`.
pub async fn store_upload(
    storage: &dyn MediaStorage,
    path: &str,
    bytes: Vec<u8>,
) -> AppResult<()> {
    let processed = tokio::task::spawn_blocking(move || process_original(&bytes))
        .await
        .map_err(|e| AppError::InternalError(format!("Image processing task failed: {e}")))??;
    storage.save(path, &processed).await?;
    tracing::debug!(path, size = processed.len(), "Stored image");
    Ok(())
}

/// Delete a stored image and, when `thumbnail_edge` is given, its cached
/// thumbnail.
pub async fn remove_media(
    storage: &dyn MediaStorage,
    path: &str,
    thumbnail_edge: Option<u32>,
) -> AppResult<()> {
    let removed = storage.delete_if_exists(path).await?;
    if let Some(edge) = thumbnail_edge {
        storage.delete_if_exists(&thumbnail_path(path, edge)).await?;
    }
    tracing::debug!(path, removed, "Removed image");
    Ok(())
}

async fn remove_attachment_files(
    storage: &dyn MediaStorage,
    kind: AttachmentKind,
    path: &str,
) -> AppResult<()> {
    remove_media(storage, path, Some(kind.thumbnail_edge())).await
}

/// Remove a file stored for a row that was never written. A cleanup failure
/// is logged so the caller still reports the original error.
async fn discard_stored(storage: &dyn MediaStorage, kind: AttachmentKind, path: &str) {
    if let Err(e) = remove_attachment_files(storage, kind, path).await {
        tracing::warn!(path, kind = %kind, error = %e, "Failed to remove orphaned upload");
    }
}

/// Store `upload` as a new attachment of owner `owner_id`.
pub async fn create_attachment(
    state: &AppState,
    kind: AttachmentKind,
    owner_id: DbId,
    upload: Upload,
) -> AppResult<Attachment> {
    if !AttachmentRepo::owner_exists(&state.pool, kind, owner_id).await? {
        return Err(CoreError::not_found_id(kind.owner_entity(), owner_id).into());
    }

    let path = upload_path(kind.upload_dir(), owner_id);
    store_upload(state.storage.as_ref(), &path, upload.bytes).await?;

    match AttachmentRepo::create(&state.pool, kind, owner_id, &path).await {
        Ok(attachment) => Ok(attachment),
        Err(e) => {
            discard_stored(state.storage.as_ref(), kind, &path).await;
            Err(e.into())
        }
    }
}

/// Swap the file of attachment `id` for `upload`; the previous file and its
/// thumbnail are deleted once the row points at the new one.
pub async fn replace_attachment_image(
    state: &AppState,
    kind: AttachmentKind,
    id: DbId,
    upload: Upload,
) -> AppResult<Attachment> {
    let existing = AttachmentRepo::find_by_id(&state.pool, kind, id)
        .await?
        .ok_or_else(|| CoreError::not_found_id(kind.entity(), id))?;

    let path = upload_path(kind.upload_dir(), existing.owner_id);
    store_upload(state.storage.as_ref(), &path, upload.bytes).await?;

    let Some(updated) = AttachmentRepo::update_image(&state.pool, kind, id, &path).await? else {
        discard_stored(state.storage.as_ref(), kind, &path).await;
        return Err(CoreError::not_found_id(kind.entity(), id).into());
    };

    if existing.image != updated.image {
        remove_attachment_files(state.storage.as_ref(), kind, &existing.image).await?;
    }
    Ok(updated)
}

/// Delete an attachment: its files first, then the row.
pub async fn delete_attachment(
    state: &AppState,
    kind: AttachmentKind,
    attachment: &Attachment,
) -> AppResult<()> {
    remove_attachment_files(state.storage.as_ref(), kind, &attachment.image).await?;
    AttachmentRepo::delete(&state.pool, kind, attachment.id).await?;
    Ok(())
}

/// Delete every attachment of owner `owner_id` one by one, so each file is
/// removed. Called before the owner row itself is deleted.
pub async fn purge_owned(state: &AppState, kind: AttachmentKind, owner_id: DbId) -> AppResult<usize> {
    let owned = AttachmentRepo::list_by_owner(&state.pool, kind, owner_id).await?;
    for attachment in &owned {
        delete_attachment(state, kind, attachment).await?;
    }
    if !owned.is_empty() {
        tracing::info!(owner_id, kind = %kind, count = owned.len(), "Purged attachments");
    }
    Ok(owned.len())
}
