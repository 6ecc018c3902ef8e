//! Image attachment kinds and their storage layout.
//!
//! Articles, dogs and litters each own an ordered collection of images. All
//! three share one contract: a processed original plus a square WEBP
//! thumbnail derived from it on demand. They differ only in table, owner
//! column, upload directory and thumbnail size, captured by
//! [`AttachmentKind`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Upload directory of an article's primary image.
pub const ARTICLE_PRIMARY_DIR: &str = "article";

/// Upload directory of news images (flat, not keyed by owner).
pub const NEWS_IMAGE_DIR: &str = "news_images";

/// Directory under the media root holding generated thumbnails.
pub const THUMBNAIL_CACHE_DIR: &str = "CACHE/thumbnails";

/// Image collection owned by a parent entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    ArticleImage,
    DogImage,
    LitterImage,
}

impl AttachmentKind {
    pub const ALL: &'static [AttachmentKind] = &[
        AttachmentKind::ArticleImage,
        AttachmentKind::DogImage,
        AttachmentKind::LitterImage,
    ];

    /// Table holding the attachment rows.
    pub fn table(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "article_images",
            AttachmentKind::DogImage => "dog_images",
            AttachmentKind::LitterImage => "litter_images",
        }
    }

    /// Foreign-key column referencing the owner.
    pub fn owner_column(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "article_id",
            AttachmentKind::DogImage => "dog_id",
            AttachmentKind::LitterImage => "litter_id",
        }
    }

    /// Table holding the owners.
    pub fn owner_table(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "articles",
            AttachmentKind::DogImage => "dogs",
            AttachmentKind::LitterImage => "litters",
        }
    }

    /// Name of the owning entity, for error messages.
    pub fn owner_entity(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "Article",
            AttachmentKind::DogImage => "Dog",
            AttachmentKind::LitterImage => "Litter",
        }
    }

    /// Name of the attachment entity, for error messages.
    pub fn entity(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "ArticleImage",
            AttachmentKind::DogImage => "DogImage",
            AttachmentKind::LitterImage => "LitterImage",
        }
    }

    /// Top-level upload directory: the lowercased entity name.
    pub fn upload_dir(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "articleimage",
            AttachmentKind::DogImage => "dogimage",
            AttachmentKind::LitterImage => "litterimage",
        }
    }

    /// Edge length in pixels of the square thumbnail.
    pub fn thumbnail_edge(self) -> u32 {
        match self {
            AttachmentKind::ArticleImage => 1024,
            AttachmentKind::DogImage | AttachmentKind::LitterImage => 600,
        }
    }

    /// URL path segment used by the API (`article-images`, ...).
    pub fn url_segment(self) -> &'static str {
        match self {
            AttachmentKind::ArticleImage => "article-images",
            AttachmentKind::DogImage => "dog-images",
            AttachmentKind::LitterImage => "litter-images",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity())
    }
}

impl FromStr for AttachmentKind {
    type Err = CoreError;

    /// Parses the URL segment form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttachmentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.url_segment() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown attachment kind '{s}'. Must be one of: article-images, dog-images, litter-images"
                ))
            })
    }
}

/// Extension of every stored original; uploads are re-encoded as JPEG
/// whatever format they arrived in.
pub const ORIGINAL_EXTENSION: &str = "jpg";

fn unique_filename() -> String {
    format!("{}.{ORIGINAL_EXTENSION}", uuid::Uuid::new_v4().simple())
}

/// Storage path of a new upload owned by entity `owner_id`.
///
/// Layout: `<dir>/<owner_id>/<random hex>.jpg`; the random name never
/// collides with an earlier upload.
pub fn upload_path(dir: &str, owner_id: DbId) -> String {
    format!("{dir}/{owner_id}/{}", unique_filename())
}

/// Storage path of a new upload in a flat directory (`news_images/<hex>.jpg`).
pub fn flat_upload_path(dir: &str) -> String {
    format!("{dir}/{}", unique_filename())
}

/// Cache location of the `edge`×`edge` WEBP thumbnail derived from `original`.
pub fn thumbnail_path(original: &str, edge: u32) -> String {
    let stem = match original.rfind('.') {
        Some(dot) if !original[dot..].contains('/') => &original[..dot],
        _ => original,
    };
    format!("{THUMBNAIL_CACHE_DIR}/{edge}x{edge}/{stem}.webp")
}
