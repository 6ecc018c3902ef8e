//! News models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kennel_core::types::{DbId, Timestamp};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Storage path of the optional illustration.
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a news item. The slug is derived from the title when
/// omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNews {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
}

/// DTO for updating a news item. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNews {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
}
