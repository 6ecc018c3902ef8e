//! Article models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kennel_core::types::{DbId, Timestamp};

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    /// Derived from the title; never set directly.
    pub slug: String,
    pub content: String,
    /// Storage path of the primary image.
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
}

/// DTO for updating an article. Only non-`None` fields are applied; a new
/// title re-derives the slug.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
}
