//! Handlers for the FAQ and the static about page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::content::{validate_body, validate_title};
use kennel_core::error::CoreError;
use kennel_core::listing::{TITLE_ABOUT, TITLE_FAQ};
use kennel_core::types::DbId;
use kennel_db::models::faq::{CreateFaq, UpdateFaq};
use kennel_db::repositories::FaqRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::{DataResponse, Items, Page};
use crate::state::AppState;

/// GET /api/v1/faq
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = FaqRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: Page {
            page_title: TITLE_FAQ.to_string(),
            content: Items { items },
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct AboutPage {}

/// GET /api/v1/about
pub async fn about() -> impl IntoResponse {
    Json(DataResponse {
        data: Page {
            page_title: TITLE_ABOUT.to_string(),
            content: AboutPage {},
        },
    })
}

/// POST /api/v1/admin/faqs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    validate_title("question", &input.question)?;
    validate_body("answer", &input.answer)?;

    let faq = FaqRepo::create(&state.pool, &input).await?;
    tracing::info!(faq_id = faq.id, "FAQ created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// PUT /api/v1/admin/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    if let Some(question) = &input.question {
        validate_title("question", question)?;
    }
    if let Some(answer) = &input.answer {
        validate_body("answer", answer)?;
    }

    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found_id("FAQ", id))?;
    tracing::info!(faq_id = id, "FAQ updated");
    Ok(Json(DataResponse { data: faq }))
}

/// DELETE /api/v1/admin/faqs/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FaqRepo::delete(&state.pool, id).await? {
        tracing::info!(faq_id = id, "FAQ deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found_id("FAQ", id).into())
    }
}
