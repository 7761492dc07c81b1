mod common;

use axum::{Router, middleware, routing::get, routing::patch};
use axum_test::TestServer;
use notes_app::api::handlers::{
    create_category_handler, delete_category_handler, list_categories_handler,
    rename_category_handler,
};
use notes_app::api::middleware::auth;
use serde_json::json;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route(
            "/api/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/api/categories/{id}",
            patch(rename_category_handler).delete(delete_category_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_create_category(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/api/categories")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "name": "travel" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "travel");
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_create_duplicate_category(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    common::seed_category(&pool, owner, "travel").await;

    let server = make_server(pool);
    let response = server
        .post("/api/categories")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "name": "travel" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_same_category_name_allowed_across_users(pool: SqlitePool) {
    let bob = common::seed_user(&pool, "bob", "builder1234").await;
    common::seed_category(&pool, bob, "travel").await;
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/api/categories")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "name": "travel" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[sqlx::test]
async fn test_list_categories_sorted_by_name(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    common::seed_category(&pool, owner, "work").await;
    common::seed_category(&pool, owner, "ideas").await;

    let server = make_server(pool);
    let response = server
        .get("/api/categories")
        .authorization_bearer(common::token_for("alice"))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["ideas", "work"]);
}

#[sqlx::test]
async fn test_rename_category(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let category = common::seed_category(&pool, owner, "travel").await;

    let server = make_server(pool);
    let response = server
        .patch(&format!("/api/categories/{category}"))
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "name": "trips" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "trips");
}

#[sqlx::test]
async fn test_rename_category_to_taken_name(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    common::seed_category(&pool, owner, "travel").await;
    let work = common::seed_category(&pool, owner, "work").await;

    let server = make_server(pool);
    let response = server
        .patch(&format!("/api/categories/{work}"))
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "name": "travel" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_rename_category_of_another_user(pool: SqlitePool) {
    let bob = common::seed_user(&pool, "bob", "builder1234").await;
    let foreign = common::seed_category(&pool, bob, "secret").await;
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .patch(&format!("/api/categories/{foreign}"))
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "name": "mine-now" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_category_detaches_notes(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let category = common::seed_category(&pool, owner, "travel").await;
    let note = common::seed_note(&pool, owner, "Trip", "pack", Some(category)).await;

    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route(
            "/api/categories/{id}",
            patch(rename_category_handler).delete(delete_category_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .delete(&format!("/api/categories/{category}"))
        .authorization_bearer(common::token_for("alice"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    // ON DELETE SET NULL: the note survives without a category.
    let category_id: Option<i64> =
        sqlx::query_scalar("SELECT category_id FROM notes WHERE id = ?1")
            .bind(note)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(category_id, None);
}

#[sqlx::test]
async fn test_delete_unknown_category(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .delete("/api/categories/9999")
        .authorization_bearer(common::token_for("alice"))
        .await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Category not found");
}
