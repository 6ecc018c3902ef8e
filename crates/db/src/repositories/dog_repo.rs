//! Repository for the `dogs` table.

use sqlx::PgPool;
use kennel_core::catalog::DogDraft;
use kennel_core::listing::DogListFilter;
use kennel_core::slugs::needs_regeneration;
use kennel_core::types::DbId;

use crate::models::dog::Dog;
use crate::repositories::slug_repo;

const COLUMNS: &str = "id, name, slug, category, status, description, birth_date, \
    gender, color, pedigree, dog_type, litter_id, price, created_at, updated_at";

const TABLE: &str = "dogs";

/// Provides CRUD operations for dogs.
///
/// Drafts are expected to be normalized ([`DogDraft::normalize`]) before
/// they reach the repository; the `ck_dogs_adult_not_for_sale` constraint
/// rejects adults that still carry sale fields.
pub struct DogRepo;

impl DogRepo {
    /// Insert a dog with a unique slug derived from its name.
    pub async fn create(pool: &PgPool, draft: &DogDraft) -> Result<Dog, sqlx::Error> {
        let slug = slug_repo::unique_slug(pool, TABLE, &draft.name, None).await?;
        let query = format!(
            "INSERT INTO dogs
                (name, slug, category, status, description, birth_date,
                 gender, color, pedigree, dog_type, litter_id, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        let dog = sqlx::query_as::<_, Dog>(&query)
            .bind(&draft.name)
            .bind(&slug)
            .bind(draft.category.as_str())
            .bind(draft.status.map(|s| s.as_str()))
            .bind(&draft.description)
            .bind(draft.birth_date)
            .bind(draft.gender.as_str())
            .bind(&draft.color)
            .bind(&draft.pedigree)
            .bind(&draft.dog_type)
            .bind(draft.litter_id)
            .bind(draft.price)
            .fetch_one(pool)
            .await?;

        tracing::debug!(dog_id = dog.id, slug = %dog.slug, "Dog inserted");
        Ok(dog)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE slug = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Dogs matching `filter`, newest first.
    ///
    /// An empty `filter.statuses` admits every status (including `NULL`).
    pub async fn list(pool: &PgPool, filter: &DogListFilter) -> Result<Vec<Dog>, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.category.is_some() {
            conditions.push(format!("category = ${bind_idx}"));
            bind_idx += 1;
        }
        if !filter.statuses.is_empty() {
            conditions.push(format!("status = ANY(${bind_idx})"));
            bind_idx += 1;
        }
        if filter.gender.is_some() {
            conditions.push(format!("gender = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit_clause = if filter.limit.is_some() {
            format!("LIMIT ${bind_idx}")
        } else {
            String::new()
        };

        let query = format!(
            "SELECT {COLUMNS} FROM dogs \
             {where_clause} \
             ORDER BY id DESC \
             {limit_clause}"
        );

        let mut q = sqlx::query_as::<_, Dog>(&query);

        if let Some(category) = filter.category {
            q = q.bind(category.as_str());
        }
        if !filter.statuses.is_empty() {
            let statuses: Vec<String> = filter
                .statuses
                .iter()
                .map(|s| s.as_str().to_string())
                .collect();
            q = q.bind(statuses);
        }
        if let Some(gender) = filter.gender {
            q = q.bind(gender.as_str());
        }
        if let Some(limit) = filter.limit {
            q = q.bind(limit);
        }

        q.fetch_all(pool).await
    }

    /// Puppies of a litter, newest first.
    pub async fn list_by_litter(pool: &PgPool, litter_id: DbId) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dogs
             WHERE litter_id = $1
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(litter_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every editable field of a dog.
    ///
    /// The slug is re-derived when the name changes. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &DogDraft,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let slug = if needs_regeneration(Some(&existing.slug), Some(&existing.name), &draft.name) {
            slug_repo::unique_slug(pool, TABLE, &draft.name, Some(id)).await?
        } else {
            existing.slug
        };

        let query = format!(
            "UPDATE dogs SET
                name = $2,
                slug = $3,
                category = $4,
                status = $5,
                description = $6,
                birth_date = $7,
                gender = $8,
                color = $9,
                pedigree = $10,
                dog_type = $11,
                litter_id = $12,
                price = $13
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(&draft.name)
            .bind(&slug)
            .bind(draft.category.as_str())
            .bind(draft.status.map(|s| s.as_str()))
            .bind(&draft.description)
            .bind(draft.birth_date)
            .bind(draft.gender.as_str())
            .bind(&draft.color)
            .bind(&draft.pedigree)
            .bind(&draft.dog_type)
            .bind(draft.litter_id)
            .bind(draft.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dog row. Litters referencing it as a parent keep existing
    /// with the parent set to `NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
