//! Handlers for the dog catalog: puppy/adult listings, dog detail pages and
//! admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use kennel_core::attachments::AttachmentKind;
use kennel_core::catalog::{DogCategory, DogDraft};
use kennel_core::error::CoreError;
use kennel_core::listing::{
    dog_list_title, litter_title, parse_gender_filter, DogListFilter, PuppyStatusFilter,
};
use kennel_core::types::DbId;
use kennel_db::models::dog::Dog;
use kennel_db::repositories::{AttachmentRepo, DogRepo, LitterRepo};
use serde::Serialize;

use crate::attachments::purge_owned;
use crate::error::AppResult;
use crate::extract::Shape;
use crate::query::DogListParams;
use crate::response::{DataResponse, ListingPage, Page};
use crate::state::AppState;
use crate::views::{index_by_owner, DogCard, DogDetailView, ImageView, LitterLink};

/// Active filters echoed back on full dog listings.
#[derive(Debug, Serialize)]
pub struct DogFilters {
    pub category: &'static str,
    pub statuses: Vec<&'static str>,
    pub gender: Option<&'static str>,
}

impl DogFilters {
    fn from_filter(filter: &DogListFilter) -> Self {
        DogFilters {
            category: filter.category.map(DogCategory::as_str).unwrap_or("all"),
            statuses: filter.statuses.iter().map(|s| s.as_str()).collect(),
            gender: filter.gender.map(|g| g.as_str()),
        }
    }
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Listing cards for `dogs`, each with its newest image.
pub(crate) async fn dog_cards(state: &AppState, dogs: Vec<Dog>) -> AppResult<Vec<DogCard>> {
    let ids: Vec<DbId> = dogs.iter().map(|d| d.id).collect();
    let first_images = index_by_owner(
        AttachmentRepo::first_by_owners(&state.pool, AttachmentKind::DogImage, &ids).await?,
    );
    Ok(DogCard::list(
        dogs,
        &first_images,
        today(),
        state.storage.as_ref(),
    ))
}

async fn listing(
    state: &AppState,
    shape: Shape,
    filter: DogListFilter,
    status: PuppyStatusFilter,
) -> AppResult<impl IntoResponse> {
    let dogs = DogRepo::list(&state.pool, &filter).await?;
    let items = dog_cards(state, dogs).await?;
    let title = dog_list_title(filter.category, status);

    Ok(Json(DataResponse {
        data: ListingPage::new(shape.0, title, DogFilters::from_filter(&filter), items),
    }))
}

/// GET /api/v1/puppies?gender=&status=
///
/// Defaults to puppies still available; `status` may name one status or
/// `archive`. Unrecognized values fall back to the defaults.
pub async fn list_puppies(
    State(state): State<AppState>,
    shape: Shape,
    Query(params): Query<DogListParams>,
) -> AppResult<impl IntoResponse> {
    let status = PuppyStatusFilter::parse(params.status.as_deref());
    let gender = parse_gender_filter(params.gender.as_deref());
    listing(&state, shape, DogListFilter::puppies(status, gender), status).await
}

/// GET /api/v1/puppies/archive?gender=
///
/// Puppies already sold or reserved.
pub async fn list_archive(
    State(state): State<AppState>,
    shape: Shape,
    Query(params): Query<DogListParams>,
) -> AppResult<impl IntoResponse> {
    let status = PuppyStatusFilter::Archive;
    let gender = parse_gender_filter(params.gender.as_deref());
    listing(&state, shape, DogListFilter::puppies(status, gender), status).await
}

/// GET /api/v1/adults?gender=
pub async fn list_adults(
    State(state): State<AppState>,
    shape: Shape,
    Query(params): Query<DogListParams>,
) -> AppResult<impl IntoResponse> {
    let gender = parse_gender_filter(params.gender.as_deref());
    listing(
        &state,
        shape,
        DogListFilter::adults(gender),
        PuppyStatusFilter::default(),
    )
    .await
}

/// GET /api/v1/dogs/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dog = DogRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_slug("Dog", &slug))?;

    let kind = AttachmentKind::DogImage;
    let images = AttachmentRepo::list_by_owner(&state.pool, kind, dog.id).await?;
    let litter = match dog.litter_id {
        Some(litter_id) => LitterRepo::find_annotated_by_id(&state.pool, litter_id)
            .await?
            .map(|l| LitterLink {
                name: litter_title(&l.display_name()),
                slug: l.slug,
            }),
        None => None,
    };

    let storage = state.storage.as_ref();
    let title = dog.name.clone();
    let card = DogCard::new(dog, images.first(), today(), storage);
    Ok(Json(DataResponse {
        data: Page {
            page_title: title,
            content: DogDetailView {
                card,
                images: ImageView::list(kind, &images, storage),
                litter,
            },
        },
    }))
}

/// POST /api/v1/admin/dogs
///
/// Adults are saved without status, litter and price whatever the payload
/// says; puppies without a status become `available`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DogDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = input.normalize()?;
    let dog = DogRepo::create(&state.pool, &draft).await?;
    tracing::info!(dog_id = dog.id, slug = %dog.slug, category = %dog.category, "Dog created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: dog })))
}

/// PUT /api/v1/admin/dogs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DogDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = input.normalize()?;
    let dog = DogRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Dog", id))?;
    tracing::info!(dog_id = id, slug = %dog.slug, "Dog updated");
    Ok(Json(DataResponse { data: dog }))
}

/// DELETE /api/v1/admin/dogs/{id}
///
/// Every image is deleted individually (file first) before the dog row.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if DogRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::not_found_id("Dog", id).into());
    }

    purge_owned(&state, AttachmentKind::DogImage, id).await?;
    DogRepo::delete(&state.pool, id).await?;
    tracing::info!(dog_id = id, "Dog deleted");
    Ok(StatusCode::NO_CONTENT)
}
