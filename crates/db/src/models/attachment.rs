//! Image attachment rows (`article_images`, `dog_images`, `litter_images`).
//!
//! The three tables share one shape; the owner column is aliased to
//! `owner_id` so a single struct reads all of them.

use serde::Serialize;
use sqlx::FromRow;
use kennel_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attachment {
    pub id: DbId,
    pub owner_id: DbId,
    /// Storage path of the processed original.
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
