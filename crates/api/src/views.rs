//! Response payloads for the public pages.
//!
//! Rows from `kennel_db` are flattened into these views together with the
//! values derived on demand: media URLs, the dog's age, reading time and
//! human-readable labels.

use std::collections::HashMap;

use chrono::NaiveDate;
use kennel_core::age::dog_age;
use kennel_core::attachments::AttachmentKind;
use kennel_core::catalog::{DogStatus, Gender};
use kennel_core::content::reading_time;
use kennel_core::storage::MediaStorage;
use kennel_core::types::DbId;
use kennel_db::models::article::Article;
use kennel_db::models::attachment::Attachment;
use kennel_db::models::dog::Dog;
use kennel_db::models::litter::AnnotatedLitter;
use kennel_db::models::news::News;
use serde::Serialize;

/// URL of the lazily rendered thumbnail of an attachment.
pub fn thumbnail_url(kind: AttachmentKind, id: DbId) -> String {
    format!("/api/v1/media/thumbnails/{}/{id}", kind.url_segment())
}

#[derive(Debug, Serialize)]
pub struct ImageView {
    pub id: DbId,
    pub image: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl ImageView {
    pub fn new(kind: AttachmentKind, attachment: &Attachment, storage: &dyn MediaStorage) -> Self {
        ImageView {
            id: attachment.id,
            image: attachment.image.clone(),
            url: storage.url(&attachment.image),
            thumbnail_url: thumbnail_url(kind, attachment.id),
        }
    }

    pub fn list(
        kind: AttachmentKind,
        attachments: &[Attachment],
        storage: &dyn MediaStorage,
    ) -> Vec<Self> {
        attachments
            .iter()
            .map(|a| ImageView::new(kind, a, storage))
            .collect()
    }
}

/// First image per owner, as returned by `AttachmentRepo::first_by_owners`.
pub fn index_by_owner(attachments: Vec<Attachment>) -> HashMap<DbId, Attachment> {
    attachments.into_iter().map(|a| (a.owner_id, a)).collect()
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewsView {
    #[serde(flatten)]
    pub news: News,
    pub image_url: Option<String>,
}

impl NewsView {
    pub fn new(news: News, storage: &dyn MediaStorage) -> Self {
        let image_url = news.image.as_deref().map(|p| storage.url(p));
        NewsView { news, image_url }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleView {
    #[serde(flatten)]
    pub article: Article,
    /// Minutes, at 200 words per minute.
    pub reading_time: u32,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageView>>,
}

impl ArticleView {
    pub fn new(article: Article, storage: &dyn MediaStorage) -> Self {
        ArticleView {
            reading_time: reading_time(&article.content),
            image_url: article.image.as_deref().map(|p| storage.url(p)),
            article,
            images: None,
        }
    }

    pub fn with_images(mut self, images: Vec<ImageView>) -> Self {
        self.images = Some(images);
        self
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A dog as shown in listings: the row, its age and its newest image.
#[derive(Debug, Serialize)]
pub struct DogCard {
    #[serde(flatten)]
    pub dog: Dog,
    pub age: Option<String>,
    pub gender_label: Option<&'static str>,
    pub status_label: Option<&'static str>,
    pub first_image: Option<ImageView>,
}

impl DogCard {
    pub fn new(
        dog: Dog,
        first_image: Option<&Attachment>,
        today: NaiveDate,
        storage: &dyn MediaStorage,
    ) -> Self {
        let gender_label = dog.gender().ok().map(Gender::label);
        let status_label = dog
            .status
            .as_deref()
            .and_then(|s| s.parse::<DogStatus>().ok())
            .map(DogStatus::label);
        DogCard {
            age: dog_age(dog.birth_date, today),
            gender_label,
            status_label,
            first_image: first_image.map(|a| ImageView::new(AttachmentKind::DogImage, a, storage)),
            dog,
        }
    }

    /// Cards for `dogs`, pairing each with its entry in `first_images`.
    pub fn list(
        dogs: Vec<Dog>,
        first_images: &HashMap<DbId, Attachment>,
        today: NaiveDate,
        storage: &dyn MediaStorage,
    ) -> Vec<Self> {
        dogs.into_iter()
            .map(|dog| {
                let image = first_images.get(&dog.id);
                DogCard::new(dog, image, today, storage)
            })
            .collect()
    }
}

/// Link to the litter a puppy was born in.
#[derive(Debug, Serialize)]
pub struct LitterLink {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DogDetailView {
    #[serde(flatten)]
    pub card: DogCard,
    pub images: Vec<ImageView>,
    pub litter: Option<LitterLink>,
}

/// A litter with its parents, counts and display name.
#[derive(Debug, Serialize)]
pub struct LitterView {
    #[serde(flatten)]
    pub litter: AnnotatedLitter,
    pub name: String,
    pub father_image: Option<ImageView>,
    pub mother_image: Option<ImageView>,
}

impl LitterView {
    pub fn new(
        litter: AnnotatedLitter,
        parent_images: &HashMap<DbId, Attachment>,
        storage: &dyn MediaStorage,
    ) -> Self {
        let image_of = |id: Option<DbId>| {
            id.and_then(|id| parent_images.get(&id))
                .map(|a| ImageView::new(AttachmentKind::DogImage, a, storage))
        };
        LitterView {
            name: litter.display_name(),
            father_image: image_of(litter.father_id),
            mother_image: image_of(litter.mother_id),
            litter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LitterDetailView {
    #[serde(flatten)]
    pub litter: LitterView,
    pub images: Vec<ImageView>,
    pub puppies: Vec<DogCard>,
}
