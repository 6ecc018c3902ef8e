//! Litter models.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use kennel_core::catalog::{litter_display_name, LitterSlugKey};
use kennel_core::types::{DbId, Timestamp};

/// A row from the `litters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Litter {
    pub id: DbId,
    /// `NULL` once the father has been removed from the catalog.
    pub father_id: Option<DbId>,
    pub mother_id: Option<DbId>,
    pub birth_date: Option<NaiveDate>,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Litter {
    pub fn slug_key(&self) -> LitterSlugKey {
        LitterSlugKey {
            father_id: self.father_id,
            mother_id: self.mother_id,
            birth_date: self.birth_date,
        }
    }
}

/// A litter joined with its parents' names and its puppy counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnnotatedLitter {
    pub id: DbId,
    pub father_id: Option<DbId>,
    pub mother_id: Option<DbId>,
    pub father_name: Option<String>,
    pub father_slug: Option<String>,
    pub mother_name: Option<String>,
    pub mother_slug: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub slug: String,
    pub puppy_count: i64,
    pub male_puppies: i64,
    pub female_puppies: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AnnotatedLitter {
    /// `"Father × Mother 2024-05-01"`.
    pub fn display_name(&self) -> String {
        litter_display_name(
            self.father_name.as_deref(),
            self.mother_name.as_deref(),
            self.birth_date,
        )
    }
}
