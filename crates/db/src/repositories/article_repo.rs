//! Repository for the `articles` table.

use sqlx::PgPool;
use kennel_core::listing::ArticleSort;
use kennel_core::slugs::needs_regeneration;
use kennel_core::types::DbId;

use crate::models::article::{Article, CreateArticle, UpdateArticle};
use crate::repositories::slug_repo;

const COLUMNS: &str = "id, title, slug, content, image, created_at, updated_at";

const TABLE: &str = "articles";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert an article with a unique slug derived from its title.
    pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let slug = slug_repo::unique_slug(pool, TABLE, &input.title, None).await?;
        let query = format!(
            "INSERT INTO articles (title, slug, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.content)
            .fetch_one(pool)
            .await?;

        tracing::debug!(article_id = article.id, slug = %article.slug, "Article inserted");
        Ok(article)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE slug = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// All articles in the requested order.
    pub async fn list(pool: &PgPool, sort: ArticleSort) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles ORDER BY {}",
            sort.order_by()
        );
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Update an article. Only non-`None` fields in `input` are applied.
    ///
    /// The slug is re-derived (and re-disambiguated) when the title changes.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let title = input.title.as_deref().unwrap_or(&existing.title);
        let slug = if needs_regeneration(Some(&existing.slug), Some(&existing.title), title) {
            slug_repo::unique_slug(pool, TABLE, title, Some(id)).await?
        } else {
            existing.slug.clone()
        };

        let query = format!(
            "UPDATE articles SET
                title = $2,
                slug = $3,
                content = COALESCE($4, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(title)
            .bind(&slug)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Point the article at a new primary image path (or none).
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        image: Option<&str>,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("UPDATE articles SET image = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article row. Its `article_images` rows cascade; their files
    /// must be purged by the caller beforehand.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
