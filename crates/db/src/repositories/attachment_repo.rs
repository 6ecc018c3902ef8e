//! Repository for the three image attachment tables.
//!
//! Every method takes the [`AttachmentKind`] selecting the table and owner
//! column; rows come back as the shared [`Attachment`] shape.

use sqlx::PgPool;
use kennel_core::attachments::AttachmentKind;
use kennel_core::types::DbId;

use crate::models::attachment::Attachment;

fn columns(kind: AttachmentKind) -> String {
    format!(
        "id, {} AS owner_id, image, created_at, updated_at",
        kind.owner_column()
    )
}

/// Provides CRUD operations for image attachments.
pub struct AttachmentRepo;

impl AttachmentRepo {
    pub async fn create(
        pool: &PgPool,
        kind: AttachmentKind,
        owner_id: DbId,
        image: &str,
    ) -> Result<Attachment, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} ({owner}, image)
             VALUES ($1, $2)
             RETURNING {columns}",
            table = kind.table(),
            owner = kind.owner_column(),
            columns = columns(kind),
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(owner_id)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        kind: AttachmentKind,
        id: DbId,
    ) -> Result<Option<Attachment>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            columns(kind),
            kind.table()
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All attachments of one owner, newest first.
    pub async fn list_by_owner(
        pool: &PgPool,
        kind: AttachmentKind,
        owner_id: DbId,
    ) -> Result<Vec<Attachment>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM {table}
             WHERE {owner} = $1
             ORDER BY id DESC",
            columns = columns(kind),
            table = kind.table(),
            owner = kind.owner_column(),
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// The newest attachment of each owner in `owner_ids` (owners without
    /// images are absent from the result).
    pub async fn first_by_owners(
        pool: &PgPool,
        kind: AttachmentKind,
        owner_ids: &[DbId],
    ) -> Result<Vec<Attachment>, sqlx::Error> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT DISTINCT ON ({owner}) {columns} FROM {table}
             WHERE {owner} = ANY($1)
             ORDER BY {owner}, id DESC",
            columns = columns(kind),
            table = kind.table(),
            owner = kind.owner_column(),
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(owner_ids)
            .fetch_all(pool)
            .await
    }

    /// Whether the owner row `owner_id` exists.
    pub async fn owner_exists(
        pool: &PgPool,
        kind: AttachmentKind,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            kind.owner_table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Replace the stored image path. Returns `None` if the row is gone.
    pub async fn update_image(
        pool: &PgPool,
        kind: AttachmentKind,
        id: DbId,
        image: &str,
    ) -> Result<Option<Attachment>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET image = $2 WHERE id = $1 RETURNING {}",
            kind.table(),
            columns(kind)
        );
        sqlx::query_as::<_, Attachment>(&query)
            .bind(id)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an attachment row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, kind: AttachmentKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
