//! Read side of slug disambiguation.
//!
//! Resolution is check-then-write without a lock: two concurrent creations
//! of the same name can both pick the same candidate, in which case the
//! second insert fails on the table's unique constraint.

use sqlx::PgPool;
use kennel_core::slugs::{base_slug, first_free_slug};
use kennel_core::types::DbId;

/// Slugs in `table` equal to `base` or of the form `base-…`, ignoring the
/// row `exclude_id`.
///
/// `base` comes from [`base_slug`], which only emits `[a-z0-9-]`, so it
/// needs no `LIKE` escaping.
pub async fn taken_slugs(
    pool: &PgPool,
    table: &str,
    base: &str,
    exclude_id: Option<DbId>,
) -> Result<Vec<String>, sqlx::Error> {
    let query = format!(
        "SELECT slug FROM {table}
         WHERE (slug = $1 OR slug LIKE $2)
           AND ($3::BIGINT IS NULL OR id <> $3)"
    );
    sqlx::query_scalar::<_, String>(&query)
        .bind(base)
        .bind(format!("{base}-%"))
        .bind(exclude_id)
        .fetch_all(pool)
        .await
}

/// Derive a slug from `source` that is unique within `table`.
pub async fn unique_slug(
    pool: &PgPool,
    table: &str,
    source: &str,
    exclude_id: Option<DbId>,
) -> Result<String, sqlx::Error> {
    let base = base_slug(source);
    let taken = taken_slugs(pool, table, &base, exclude_id).await?;
    Ok(first_free_slug(&base, &taken))
}
