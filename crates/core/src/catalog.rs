//! Catalog domain: dog categories, sale statuses, genders, and the
//! normalization applied to every dog and litter before it is persisted.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a dog's name.
pub const MAX_DOG_NAME_LENGTH: usize = 20;

/// Maximum length of the color and type fields.
pub const MAX_DOG_ATTRIBUTE_LENGTH: usize = 100;

/// Maximum length of a pedigree link.
pub const MAX_PEDIGREE_URL_LENGTH: usize = 500;

/// Largest price representable by the `NUMERIC(10, 2)` column.
pub fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            /// All values, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value stored in the database and used in URLs.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $label,
                        [$($value),+].join(", ")
                    ))),
                }
            }
        }
    };
}

string_enum! {
    /// Whether a dog is a puppy for sale or adult breeding stock.
    DogCategory ("category") {
        Puppy => "puppy",
        Adult => "adult",
    }
}

string_enum! {
    /// Sale status; only meaningful for puppies.
    DogStatus ("status") {
        Available => "available",
        Reserved => "reserved",
        Sold => "sold",
    }
}

string_enum! {
    Gender ("gender") {
        Male => "M",
        Female => "F",
    }
}

impl DogCategory {
    /// Admin-facing label.
    pub fn label(self) -> &'static str {
        match self {
            DogCategory::Puppy => "Щенок",
            DogCategory::Adult => "Производитель",
        }
    }
}

impl DogStatus {
    pub fn label(self) -> &'static str {
        match self {
            DogStatus::Available => "Свободен",
            DogStatus::Reserved => "Забронирован",
            DogStatus::Sold => "Куплен",
        }
    }
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Кобель",
            Gender::Female => "Сука",
        }
    }
}

// ---------------------------------------------------------------------------
// Dog
// ---------------------------------------------------------------------------

/// Complete set of editable dog fields, as submitted by the admin.
///
/// Create and update both take the full draft because the adult/puppy
/// invariant depends on every field at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogDraft {
    pub name: String,
    pub category: DogCategory,
    pub status: Option<DogStatus>,
    pub gender: Gender,
    pub color: Option<String>,
    pub pedigree: Option<String>,
    pub dog_type: Option<String>,
    pub description: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub litter_id: Option<DbId>,
    pub price: Option<Decimal>,
}

impl DogDraft {
    /// Validate the draft and apply the category invariant.
    ///
    /// Adults are breeding stock: status, litter and price are always
    /// cleared. Puppies without an explicit status become `available`.
    /// Blank optional strings are stored as `NULL`.
    pub fn normalize(self) -> Result<Self, CoreError> {
        let name = self.name.trim().to_string();
        validate_dog_name(&name)?;

        let color = blank_to_none(self.color);
        let dog_type = blank_to_none(self.dog_type);
        let pedigree = blank_to_none(self.pedigree);
        let description = blank_to_none(self.description);

        if let Some(color) = &color {
            validate_max_length("color", color, MAX_DOG_ATTRIBUTE_LENGTH)?;
        }
        if let Some(dog_type) = &dog_type {
            validate_max_length("dog_type", dog_type, MAX_DOG_ATTRIBUTE_LENGTH)?;
        }
        if let Some(pedigree) = &pedigree {
            validate_pedigree_url(pedigree)?;
        }

        let (status, litter_id, price) = match self.category {
            DogCategory::Adult => (None, None, None),
            DogCategory::Puppy => {
                if let Some(price) = self.price {
                    validate_price(price)?;
                }
                (
                    Some(self.status.unwrap_or(DogStatus::Available)),
                    self.litter_id,
                    self.price,
                )
            }
        };

        Ok(DogDraft {
            name,
            category: self.category,
            status,
            gender: self.gender,
            color,
            pedigree,
            dog_type,
            description,
            birth_date: self.birth_date,
            litter_id,
            price,
        })
    }
}

/// Validate a dog's name: non-empty and at most [`MAX_DOG_NAME_LENGTH`] chars.
pub fn validate_dog_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Dog name must not be empty".into()));
    }
    validate_max_length("name", name, MAX_DOG_NAME_LENGTH)
}

/// Validate that a price is non-negative and fits `NUMERIC(10, 2)`.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price.is_sign_negative() {
        return Err(CoreError::Validation("Price must not be negative".into()));
    }
    if price > max_price() {
        return Err(CoreError::Validation(format!(
            "Price must not exceed {}",
            max_price()
        )));
    }
    Ok(())
}

/// Validate that a pedigree link is an http(s) URL of acceptable length.
pub fn validate_pedigree_url(url: &str) -> Result<(), CoreError> {
    validate_max_length("pedigree", url, MAX_PEDIGREE_URL_LENGTH)?;
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid pedigree link '{url}'. Must start with http:// or https://"
        )))
    }
}

fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )))
    } else {
        Ok(())
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Litter
// ---------------------------------------------------------------------------

/// Which parent slot of a litter a dog is being assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRole {
    Father,
    Mother,
}

impl ParentRole {
    /// The gender a dog must have to fill this slot.
    pub fn required_gender(self) -> Gender {
        match self {
            ParentRole::Father => Gender::Male,
            ParentRole::Mother => Gender::Female,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ParentRole::Father => "father",
            ParentRole::Mother => "mother",
        }
    }
}

/// Validate that a dog may be a litter's father or mother.
///
/// Parents must be adults of the matching gender.
pub fn validate_parent(
    role: ParentRole,
    gender: Gender,
    category: DogCategory,
) -> Result<(), CoreError> {
    if category != DogCategory::Adult {
        return Err(CoreError::Validation(format!(
            "The {} of a litter must be an adult, got {category}",
            role.as_str()
        )));
    }
    if gender != role.required_gender() {
        return Err(CoreError::Validation(format!(
            "The {} of a litter must have gender {}, got {gender}",
            role.as_str(),
            role.required_gender()
        )));
    }
    Ok(())
}

/// Editable litter fields, as submitted by the admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitterDraft {
    pub father_id: DbId,
    pub mother_id: DbId,
    pub birth_date: Option<NaiveDate>,
}

/// The fields a litter slug is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitterSlugKey {
    pub father_id: Option<DbId>,
    pub mother_id: Option<DbId>,
    pub birth_date: Option<NaiveDate>,
}

impl From<&LitterDraft> for LitterSlugKey {
    fn from(draft: &LitterDraft) -> Self {
        LitterSlugKey {
            father_id: Some(draft.father_id),
            mother_id: Some(draft.mother_id),
            birth_date: draft.birth_date,
        }
    }
}

/// Whether a litter's cached slug must be regenerated.
///
/// New litters always get one; existing litters only when the father, the
/// mother or the birth date changed since the last save.
pub fn litter_slug_stale(previous: Option<LitterSlugKey>, next: LitterSlugKey) -> bool {
    previous.map_or(true, |previous| previous != next)
}

/// Display name of a litter: `"Father × Mother 2024-05-01"`.
///
/// Parents removed from the catalog are shown as `"?"`.
pub fn litter_display_name(
    father: Option<&str>,
    mother: Option<&str>,
    birth_date: Option<NaiveDate>,
) -> String {
    let father = father.unwrap_or("?");
    let mother = mother.unwrap_or("?");
    match birth_date {
        Some(date) => format!("{father} × {mother} {date}"),
        None => format!("{father} × {mother}"),
    }
}
