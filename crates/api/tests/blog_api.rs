//! HTTP-level tests for news, articles, FAQ and the about page.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_json_strict, delete, get, get_partial, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_article(pool: &PgPool, title: &str, content: &str) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/articles",
        json!({ "title": title, "content": content }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

fn titles(json: &serde_json::Value) -> Vec<String> {
    json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_list_sorting(pool: PgPool) {
    for title in ["Beta", "Alpha", "Gamma"] {
        create_article(&pool, title, "text").await;
    }

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/articles?sort=title_desc",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["page_title"], "Статьи");
    assert_eq!(json["data"]["filters"]["sort"], "title_desc");
    assert_eq!(titles(&json), vec!["Gamma", "Beta", "Alpha"]);

    let default = body_json(get(common::build_test_app(pool.clone()), "/api/v1/articles").await).await;
    let unknown = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/articles?sort=sideways",
        )
        .await,
    )
    .await;
    assert_eq!(titles(&unknown), titles(&default));
    assert_eq!(unknown["data"]["filters"]["sort"], "date_desc");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_partial_listing(pool: PgPool) {
    create_article(&pool, "Alpha", "text").await;

    let response = get_partial(common::build_test_app(pool), "/api/v1/articles").await;
    let json = body_json(response).await;
    assert!(json["data"].get("page_title").is_none());
    assert_eq!(titles(&json), vec!["Alpha"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_detail_and_reading_time(pool: PgPool) {
    let content = vec!["word"; 450].join(" ");
    let article = create_article(&pool, "Long Read", &content).await;
    assert_eq!(article["slug"], "long-read");
    assert_eq!(article["reading_time"], 3);

    let response = get(common::build_test_app(pool), "/api/v1/articles/long-read").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json_strict(response).await;
    assert_eq!(json["data"]["page_title"], "Long Read");
    assert_eq!(json["data"]["title"], "Long Read");
    assert_eq!(json["data"]["reading_time"], 3);
    assert_eq!(json["data"]["images"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_slugs_increment(pool: PgPool) {
    let first = create_article(&pool, "Same", "a").await;
    let second = create_article(&pool, "Same", "b").await;
    assert_eq!(first["slug"], "same");
    assert_eq!(second["slug"], "same-1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_rename_follows_title(pool: PgPool) {
    let article = create_article(&pool, "Old Title", "a").await;
    let id = article["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/admin/articles/{id}"),
        json!({ "title": "New Title" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "new-title");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_article_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/articles/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_article_title_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/admin/articles",
        json!({ "title": "  ", "content": "text" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_slug_collision_returns_409(pool: PgPool) {
    let body = json!({ "title": "Open Day", "content": "Come visit" });

    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/admin/news", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "open-day");

    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/admin/news", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(common::build_test_app(pool), "/api/v1/news/open-day").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json_strict(response).await;
    assert_eq!(json["data"]["page_title"], "Open Day");
    assert_eq!(json["data"]["title"], "Open Day");
    assert!(json["data"]["image_url"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_list_and_delete(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/admin/news",
        json!({ "title": "First", "content": "a" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool.clone()), "/api/v1/news").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["page_title"], "Новости");
    assert_eq!(titles(&json), vec!["First"]);

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admin/news/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(
        common::build_test_app(pool),
        &format!("/api/v1/admin/news/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faq_list_in_creation_order(pool: PgPool) {
    for question in ["First?", "Second?"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/admin/faqs",
            json!({ "question": question, "answer": "Yes." }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(common::build_test_app(pool), "/api/v1/faq").await;
    let json = body_json(response).await;
    let questions: Vec<&str> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["question"].as_str().unwrap())
        .collect();
    assert_eq!(questions, vec!["First?", "Second?"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_page(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["page_title"], "Наша история");
}
