//! Slug generation against a real database:
//! - Article, Dog and Litter creations disambiguate with `-1`, `-2`, ...
//! - News does not retry and fails on its unique constraint
//! - Slugs follow renames and ignore the row's own current slug

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use kennel_core::catalog::{DogCategory, DogDraft, Gender, LitterDraft};
use kennel_db::models::article::{CreateArticle, UpdateArticle};
use kennel_db::models::news::CreateNews;
use kennel_db::repositories::{ArticleRepo, DogRepo, LitterRepo, NewsRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn adult(name: &str, gender: Gender) -> DogDraft {
    DogDraft {
        name: name.to_string(),
        category: DogCategory::Adult,
        status: None,
        gender,
        color: None,
        pedigree: None,
        dog_type: None,
        description: None,
        birth_date: None,
        litter_id: None,
        price: None,
    }
}

fn article(title: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        content: "Body".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_slugs_are_counter_disambiguated(pool: PgPool) {
    let mut slugs = Vec::new();
    for _ in 0..3 {
        let created = ArticleRepo::create(&pool, &article("Puppy Care")).await.unwrap();
        slugs.push(created.slug);
    }
    assert_eq!(slugs, vec!["puppy-care", "puppy-care-1", "puppy-care-2"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_slug_is_transliterated(pool: PgPool) {
    let created = ArticleRepo::create(&pool, &article("Уход за щенком")).await.unwrap();
    assert!(!created.slug.is_empty());
    assert!(created
        .slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_rename_regenerates_slug(pool: PgPool) {
    let created = ArticleRepo::create(&pool, &article("Feeding")).await.unwrap();

    let same_title = UpdateArticle {
        title: Some("Feeding".to_string()),
        content: Some("New body".to_string()),
    };
    let unchanged = ArticleRepo::update(&pool, created.id, &same_title)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.slug, "feeding");
    assert_eq!(unchanged.content, "New body");

    let renamed = UpdateArticle {
        title: Some("Grooming".to_string()),
        content: None,
    };
    let updated = ArticleRepo::update(&pool, created.id, &renamed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.slug, "grooming");
    assert_eq!(updated.content, "New body");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_article_returns_none(pool: PgPool) {
    let result = ArticleRepo::update(&pool, 9999, &UpdateArticle::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dog_slugs_are_counter_disambiguated(pool: PgPool) {
    let first = DogRepo::create(&pool, &adult("Rex", Gender::Male)).await.unwrap();
    let second = DogRepo::create(&pool, &adult("Rex", Gender::Male)).await.unwrap();
    assert_eq!(first.slug, "rex");
    assert_eq!(second.slug, "rex-1");

    // Re-saving under the same name keeps the slug.
    let draft = first.to_draft().unwrap();
    let resaved = DogRepo::update(&pool, first.id, &draft).await.unwrap().unwrap();
    assert_eq!(resaved.slug, "rex");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_litter_slugs_are_counter_disambiguated(pool: PgPool) {
    let father = DogRepo::create(&pool, &adult("Max", Gender::Male)).await.unwrap();
    let mother = DogRepo::create(&pool, &adult("Bella", Gender::Female)).await.unwrap();
    let draft = LitterDraft {
        father_id: father.id,
        mother_id: mother.id,
        birth_date: NaiveDate::from_ymd_opt(2024, 5, 1),
    };

    let first = LitterRepo::create(&pool, &draft).await.unwrap();
    let second = LitterRepo::create(&pool, &draft).await.unwrap();
    assert_eq!(second.slug, format!("{}-1", first.slug));
    assert!(first.slug.starts_with("max-"));
    assert!(first.slug.ends_with("bella-2024-05-01"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_litter_slug_changes_only_with_parents_or_date(pool: PgPool) {
    let father = DogRepo::create(&pool, &adult("Max", Gender::Male)).await.unwrap();
    let mother = DogRepo::create(&pool, &adult("Bella", Gender::Female)).await.unwrap();
    let draft = LitterDraft {
        father_id: father.id,
        mother_id: mother.id,
        birth_date: NaiveDate::from_ymd_opt(2024, 5, 1),
    };
    let litter = LitterRepo::create(&pool, &draft).await.unwrap();

    // Renaming a parent does not touch the cached slug.
    let mut renamed = father.to_draft().unwrap();
    renamed.name = "Titan".to_string();
    DogRepo::update(&pool, father.id, &renamed).await.unwrap();
    let resaved = LitterRepo::update(&pool, litter.id, &draft).await.unwrap().unwrap();
    assert_eq!(resaved.slug, litter.slug);

    let moved = LitterDraft {
        birth_date: NaiveDate::from_ymd_opt(2024, 6, 2),
        ..draft
    };
    let updated = LitterRepo::update(&pool, litter.id, &moved).await.unwrap().unwrap();
    assert!(updated.slug.starts_with("titan-"));
    assert!(updated.slug.ends_with("2024-06-02"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_slug_collision_is_rejected(pool: PgPool) {
    let input = CreateNews {
        title: "Open day".to_string(),
        slug: None,
        content: "Come visit".to_string(),
    };
    let first = NewsRepo::create(&pool, &input).await.unwrap();
    assert_eq!(first.slug, "open-day");

    let result = NewsRepo::create(&pool, &input).await;
    assert_matches!(
        result,
        Err(sqlx::Error::Database(ref e)) if e.constraint() == Some("uq_news_slug")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_explicit_slug_is_normalized(pool: PgPool) {
    let input = CreateNews {
        title: "Anything".to_string(),
        slug: Some("Summer Show 2024".to_string()),
        content: "Results".to_string(),
    };
    let created = NewsRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.slug, "summer-show-2024");
}
