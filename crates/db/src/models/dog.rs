//! Dog models.
//!
//! Writes go through [`kennel_core::catalog::DogDraft`], which carries the
//! category invariant; the row keeps enum columns as their string codes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use kennel_core::catalog::{DogCategory, DogDraft, DogStatus, Gender};
use kennel_core::error::CoreError;
use kennel_core::types::{DbId, Timestamp};

/// A row from the `dogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    /// `puppy` or `adult`.
    pub category: String,
    /// `available`, `reserved` or `sold`; always `NULL` for adults.
    pub status: Option<String>,
    pub description: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// `M` or `F`.
    pub gender: String,
    pub color: Option<String>,
    pub pedigree: Option<String>,
    pub dog_type: Option<String>,
    pub litter_id: Option<DbId>,
    pub price: Option<Decimal>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Dog {
    pub fn category(&self) -> Result<DogCategory, CoreError> {
        self.category.parse()
    }

    pub fn gender(&self) -> Result<Gender, CoreError> {
        self.gender.parse()
    }

    /// The stored row as an editable draft.
    pub fn to_draft(&self) -> Result<DogDraft, CoreError> {
        Ok(DogDraft {
            name: self.name.clone(),
            category: self.category()?,
            status: self
                .status
                .as_deref()
                .map(str::parse::<DogStatus>)
                .transpose()?,
            gender: self.gender()?,
            color: self.color.clone(),
            pedigree: self.pedigree.clone(),
            dog_type: self.dog_type.clone(),
            description: self.description.clone(),
            birth_date: self.birth_date,
            litter_id: self.litter_id,
            price: self.price,
        })
    }
}
