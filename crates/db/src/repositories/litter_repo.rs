//! Repository for the `litters` table.

use sqlx::PgPool;
use kennel_core::catalog::{litter_slug_stale, LitterDraft, LitterSlugKey};
use kennel_core::slugs::litter_slug_source;
use kennel_core::types::DbId;

use crate::models::litter::{AnnotatedLitter, Litter};
use crate::repositories::slug_repo;

const COLUMNS: &str = "id, father_id, mother_id, birth_date, slug, created_at, updated_at";

const TABLE: &str = "litters";

/// Litters joined with both parents and their puppies, counted per gender.
///
/// Shared by the list and detail pages so both report identical counts.
fn annotated_query(where_clause: &str) -> String {
    format!(
        "SELECT \
            l.id, l.father_id, l.mother_id, \
            f.name AS father_name, f.slug AS father_slug, \
            m.name AS mother_name, m.slug AS mother_slug, \
            l.birth_date, l.slug, \
            COUNT(p.id) AS puppy_count, \
            COUNT(p.id) FILTER (WHERE p.gender = 'M') AS male_puppies, \
            COUNT(p.id) FILTER (WHERE p.gender = 'F') AS female_puppies, \
            l.created_at, l.updated_at \
         FROM litters l \
         LEFT JOIN dogs f ON f.id = l.father_id \
         LEFT JOIN dogs m ON m.id = l.mother_id \
         LEFT JOIN dogs p ON p.litter_id = l.id \
         {where_clause} \
         GROUP BY l.id, f.id, m.id \
         ORDER BY l.birth_date DESC NULLS LAST, l.id DESC"
    )
}

/// Provides CRUD operations for litters.
pub struct LitterRepo;

impl LitterRepo {
    /// Insert a litter; its slug is derived from the parents' names and the
    /// birth date.
    pub async fn create(pool: &PgPool, draft: &LitterDraft) -> Result<Litter, sqlx::Error> {
        let source = Self::slug_source(pool, LitterSlugKey::from(draft)).await?;
        let slug = slug_repo::unique_slug(pool, TABLE, &source, None).await?;

        let query = format!(
            "INSERT INTO litters (father_id, mother_id, birth_date, slug)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let litter = sqlx::query_as::<_, Litter>(&query)
            .bind(draft.father_id)
            .bind(draft.mother_id)
            .bind(draft.birth_date)
            .bind(&slug)
            .fetch_one(pool)
            .await?;

        tracing::debug!(litter_id = litter.id, slug = %litter.slug, "Litter inserted");
        Ok(litter)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Litter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM litters WHERE id = $1");
        sqlx::query_as::<_, Litter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All litters with parent names and puppy counts, youngest first.
    pub async fn list_annotated(pool: &PgPool) -> Result<Vec<AnnotatedLitter>, sqlx::Error> {
        let query = annotated_query("");
        sqlx::query_as::<_, AnnotatedLitter>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_annotated_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<AnnotatedLitter>, sqlx::Error> {
        let query = annotated_query("WHERE l.slug = $1");
        sqlx::query_as::<_, AnnotatedLitter>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_annotated_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AnnotatedLitter>, sqlx::Error> {
        let query = annotated_query("WHERE l.id = $1");
        sqlx::query_as::<_, AnnotatedLitter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a litter's parents and birth date.
    ///
    /// The slug is regenerated only if one of those three changed. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &LitterDraft,
    ) -> Result<Option<Litter>, sqlx::Error> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let key = LitterSlugKey::from(draft);
        let slug = if litter_slug_stale(Some(existing.slug_key()), key) {
            let source = Self::slug_source(pool, key).await?;
            slug_repo::unique_slug(pool, TABLE, &source, Some(id)).await?
        } else {
            existing.slug
        };

        let query = format!(
            "UPDATE litters SET
                father_id = $2,
                mother_id = $3,
                birth_date = $4,
                slug = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Litter>(&query)
            .bind(id)
            .bind(draft.father_id)
            .bind(draft.mother_id)
            .bind(draft.birth_date)
            .bind(&slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a litter row. Its puppies stay with `litter_id` set to `NULL`;
    /// its `litter_images` rows cascade, so their files must be purged by the
    /// caller beforehand.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM litters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn slug_source(pool: &PgPool, key: LitterSlugKey) -> Result<String, sqlx::Error> {
        let father = Self::dog_name(pool, key.father_id).await?;
        let mother = Self::dog_name(pool, key.mother_id).await?;
        Ok(litter_slug_source(
            father.as_deref(),
            mother.as_deref(),
            key.birth_date,
        ))
    }

    async fn dog_name(pool: &PgPool, id: Option<DbId>) -> Result<Option<String>, sqlx::Error> {
        let Some(id) = id else {
            return Ok(None);
        };
        sqlx::query_scalar::<_, String>("SELECT name FROM dogs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
