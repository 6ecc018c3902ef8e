//! Listing parameters for the public pages.
//!
//! Every parameter parser here is total: unrecognised values degrade to the
//! default instead of failing the request.

use serde::Serialize;

use crate::catalog::{DogCategory, DogStatus, Gender};

/// Number of puppies and adults shown on the landing page.
pub const HOME_PAGE_DOG_LIMIT: i64 = 4;

// ---------------------------------------------------------------------------
// Article sort order
// ---------------------------------------------------------------------------

/// Sort order of the article list (`?sort=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSort {
    TitleAsc,
    TitleDesc,
    DateAsc,
    #[default]
    DateDesc,
}

impl ArticleSort {
    /// Parse the `sort` query value; unknown or missing values yield the default.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("title_asc") => ArticleSort::TitleAsc,
            Some("title_desc") => ArticleSort::TitleDesc,
            Some("date_asc") => ArticleSort::DateAsc,
            _ => ArticleSort::DateDesc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleSort::TitleAsc => "title_asc",
            ArticleSort::TitleDesc => "title_desc",
            ArticleSort::DateAsc => "date_asc",
            ArticleSort::DateDesc => "date_desc",
        }
    }

    /// `ORDER BY` clause for the `articles` table. `id` breaks ties.
    pub fn order_by(self) -> &'static str {
        match self {
            ArticleSort::TitleAsc => "title ASC, id ASC",
            ArticleSort::TitleDesc => "title DESC, id DESC",
            ArticleSort::DateAsc => "created_at ASC, id ASC",
            ArticleSort::DateDesc => "created_at DESC, id DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Dog filters
// ---------------------------------------------------------------------------

/// Parse the `gender` query value. Only `M` and `F` filter; anything else
/// means "no filter".
pub fn parse_gender_filter(value: Option<&str>) -> Option<Gender> {
    match value {
        Some("M") => Some(Gender::Male),
        Some("F") => Some(Gender::Female),
        _ => None,
    }
}

/// Which sale statuses a puppy listing admits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PuppyStatusFilter {
    /// Puppies still for sale.
    #[default]
    Available,
    /// Graduates: puppies already sold or reserved.
    Archive,
    /// An explicitly requested status.
    Only(DogStatus),
}

impl PuppyStatusFilter {
    /// Parse the `status` query value; invalid values fall back to `Available`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("archive") => PuppyStatusFilter::Archive,
            Some(other) => other
                .parse::<DogStatus>()
                .map(PuppyStatusFilter::Only)
                .unwrap_or_default(),
            None => PuppyStatusFilter::Available,
        }
    }

    pub fn statuses(self) -> Vec<DogStatus> {
        match self {
            PuppyStatusFilter::Available => vec![DogStatus::Available],
            PuppyStatusFilter::Archive => vec![DogStatus::Sold, DogStatus::Reserved],
            PuppyStatusFilter::Only(status) => vec![status],
        }
    }
}

/// Complete filter for a dog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogListFilter {
    pub category: Option<DogCategory>,
    /// Empty means any status.
    pub statuses: Vec<DogStatus>,
    pub gender: Option<Gender>,
    pub limit: Option<i64>,
}

impl DogListFilter {
    /// Puppies matching `status`, optionally of one gender.
    pub fn puppies(status: PuppyStatusFilter, gender: Option<Gender>) -> Self {
        DogListFilter {
            category: Some(DogCategory::Puppy),
            statuses: status.statuses(),
            gender,
            limit: None,
        }
    }

    /// Adult breeding stock, optionally of one gender.
    pub fn adults(gender: Option<Gender>) -> Self {
        DogListFilter {
            category: Some(DogCategory::Adult),
            statuses: Vec::new(),
            gender,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ---------------------------------------------------------------------------
// Page titles
// ---------------------------------------------------------------------------

pub const TITLE_PUPPIES: &str = "Свободные щенки";
pub const TITLE_ADULTS: &str = "Производители";
pub const TITLE_ALL_DOGS: &str = "Американские булли";
pub const TITLE_GRADUATES: &str = "Наши выпускники";
pub const TITLE_LITTERS: &str = "Помёты";
pub const TITLE_ARTICLES: &str = "Статьи";
pub const TITLE_NEWS: &str = "Новости";
pub const TITLE_FAQ: &str = "Часто задаваемые вопросы";
pub const TITLE_ABOUT: &str = "Наша история";

/// Title of a dog listing page.
pub fn dog_list_title(category: Option<DogCategory>, status: PuppyStatusFilter) -> &'static str {
    match (category, status) {
        (Some(DogCategory::Puppy), PuppyStatusFilter::Archive)
        | (Some(DogCategory::Puppy), PuppyStatusFilter::Only(DogStatus::Sold)) => TITLE_GRADUATES,
        (Some(DogCategory::Puppy), _) => TITLE_PUPPIES,
        (Some(DogCategory::Adult), _) => TITLE_ADULTS,
        (None, _) => TITLE_ALL_DOGS,
    }
}

/// Title of a litter detail page.
pub fn litter_title(display_name: &str) -> String {
    format!("Помёт {display_name}")
}

// ---------------------------------------------------------------------------
// Response shape
// ---------------------------------------------------------------------------

/// Whether the caller wants the whole page or only the refreshed fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseShape {
    #[default]
    Full,
    Partial,
}

impl ResponseShape {
    pub fn from_partial_flag(partial: bool) -> Self {
        if partial {
            ResponseShape::Partial
        } else {
            ResponseShape::Full
        }
    }
}
