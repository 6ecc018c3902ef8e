//! Landing page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::catalog::DogCategory;
use kennel_core::listing::{DogListFilter, HOME_PAGE_DOG_LIMIT};
use kennel_db::models::faq::Faq;
use kennel_db::repositories::{DogRepo, FaqRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::dog::dog_cards;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::DogCard;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub puppies: Vec<DogCard>,
    pub adults: Vec<DogCard>,
    pub faqs: Vec<Faq>,
}

fn newest(category: DogCategory) -> DogListFilter {
    DogListFilter {
        category: Some(category),
        ..DogListFilter::default()
    }
    .with_limit(HOME_PAGE_DOG_LIMIT)
}

/// GET /api/v1
///
/// The newest puppies (any status), the newest adults and the full FAQ.
pub async fn index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let puppies = DogRepo::list(&state.pool, &newest(DogCategory::Puppy)).await?;
    let adults = DogRepo::list(&state.pool, &newest(DogCategory::Adult)).await?;
    let faqs = FaqRepo::list(&state.pool).await?;

    Ok(Json(DataResponse {
        data: HomePage {
            puppies: dog_cards(&state, puppies).await?,
            adults: dog_cards(&state, adults).await?,
            faqs,
        },
    }))
}
