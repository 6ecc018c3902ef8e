//! Handlers for litters: the annotated list, litter detail pages with their
//! puppies, and admin CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::attachments::AttachmentKind;
use kennel_core::catalog::{validate_parent, LitterDraft, ParentRole};
use kennel_core::error::CoreError;
use kennel_core::listing::{litter_title, TITLE_LITTERS};
use kennel_core::types::DbId;
use kennel_db::models::litter::AnnotatedLitter;
use kennel_db::repositories::{AttachmentRepo, DogRepo, LitterRepo};

use crate::attachments::purge_owned;
use crate::error::AppResult;
use crate::handlers::dog::dog_cards;
use crate::response::{DataResponse, Items, Page};
use crate::state::AppState;
use crate::views::{index_by_owner, ImageView, LitterDetailView, LitterView};

/// Views for `litters`, each with its parents' newest images.
async fn litter_views(state: &AppState, litters: Vec<AnnotatedLitter>) -> AppResult<Vec<LitterView>> {
    let parent_ids: Vec<DbId> = litters
        .iter()
        .flat_map(|l| [l.father_id, l.mother_id])
        .flatten()
        .collect();
    let parent_images = index_by_owner(
        AttachmentRepo::first_by_owners(&state.pool, AttachmentKind::DogImage, &parent_ids)
            .await?,
    );
    Ok(litters
        .into_iter()
        .map(|l| LitterView::new(l, &parent_images, state.storage.as_ref()))
        .collect())
}

/// GET /api/v1/litters
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let litters = LitterRepo::list_annotated(&state.pool).await?;
    let items = litter_views(&state, litters).await?;
    Ok(Json(DataResponse {
        data: Page {
            page_title: TITLE_LITTERS.to_string(),
            content: Items { items },
        },
    }))
}

/// GET /api/v1/litters/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let litter = LitterRepo::find_annotated_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| CoreError::not_found_slug("Litter", &slug))?;
    let litter_id = litter.id;

    let kind = AttachmentKind::LitterImage;
    let images = AttachmentRepo::list_by_owner(&state.pool, kind, litter_id).await?;
    let puppies = DogRepo::list_by_litter(&state.pool, litter_id).await?;
    let puppies = dog_cards(&state, puppies).await?;

    let view = litter_views(&state, vec![litter])
        .await?
        .pop()
        .ok_or_else(|| CoreError::not_found_slug("Litter", &slug))?;

    Ok(Json(DataResponse {
        data: Page {
            page_title: litter_title(&view.name),
            content: LitterDetailView {
                litter: view,
                images: ImageView::list(kind, &images, state.storage.as_ref()),
                puppies,
            },
        },
    }))
}

/// Both parents must exist and be adults of the matching gender.
async fn check_parents(state: &AppState, draft: &LitterDraft) -> AppResult<()> {
    for (role, id) in [
        (ParentRole::Father, draft.father_id),
        (ParentRole::Mother, draft.mother_id),
    ] {
        let parent = DogRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| CoreError::Validation(format!("Dog {id} does not exist")))?;
        validate_parent(role, parent.gender()?, parent.category()?)?;
    }
    Ok(())
}

/// POST /api/v1/admin/litters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<LitterDraft>,
) -> AppResult<impl IntoResponse> {
    check_parents(&state, &input).await?;
    let litter = LitterRepo::create(&state.pool, &input).await?;
    tracing::info!(litter_id = litter.id, slug = %litter.slug, "Litter created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: litter })))
}

/// PUT /api/v1/admin/litters/{id}
///
/// The slug only changes when a parent or the birth date does.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<LitterDraft>,
) -> AppResult<impl IntoResponse> {
    check_parents(&state, &input).await?;
    let litter = LitterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_id("Litter", id))?;
    tracing::info!(litter_id = id, slug = %litter.slug, "Litter updated");
    Ok(Json(DataResponse { data: litter }))
}

/// DELETE /api/v1/admin/litters/{id}
///
/// Images are deleted individually before the row; puppies stay in the
/// catalog without a litter.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if LitterRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(CoreError::not_found_id("Litter", id).into());
    }

    purge_owned(&state, AttachmentKind::LitterImage, id).await?;
    LitterRepo::delete(&state.pool, id).await?;
    tracing::info!(litter_id = id, "Litter deleted");
    Ok(StatusCode::NO_CONTENT)
}
