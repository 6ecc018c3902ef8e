//! Repository for the `news` table.

use sqlx::PgPool;
use kennel_core::slugs::base_slug;
use kennel_core::types::DbId;

use crate::models::news::{CreateNews, News, UpdateNews};

const COLUMNS: &str = "id, title, slug, content, image, created_at, updated_at";

/// Provides CRUD operations for news items.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a news item.
    ///
    /// An explicit slug is normalized with the same slugify rules. A missing
    /// slug is derived from the title without collision
    /// disambiguation: a second item whose title yields the same slug fails
    /// on `uq_news_slug`.
    pub async fn create(pool: &PgPool, input: &CreateNews) -> Result<News, sqlx::Error> {
        let slug = match input.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => base_slug(slug),
            _ => base_slug(&input.title),
        };
        let query = format!(
            "INSERT INTO news (title, slug, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE slug = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All news, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, News>(&query).fetch_all(pool).await
    }

    /// Update a news item. Only non-`None` fields in `input` are applied; a
    /// changed title keeps the existing slug.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNews,
    ) -> Result<Option<News>, sqlx::Error> {
        let slug = input
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(base_slug);
        let query = format!(
            "UPDATE news SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Point the news item at a new image path (or none).
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        image: Option<&str>,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!("UPDATE news SET image = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a news item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
