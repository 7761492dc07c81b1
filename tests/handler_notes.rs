mod common;

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use notes_app::api::handlers::{
    create_note_handler, delete_note_handler, get_note_handler, list_notes_handler,
    update_note_handler,
};
use notes_app::api::middleware::auth;
use serde_json::json;
use sqlx::SqlitePool;

/// Build a test server with the note routes behind the bearer middleware,
/// exactly as they are mounted under `/api` in production.
fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route(
            "/api/notes",
            get(list_notes_handler).post(create_note_handler),
        )
        .route(
            "/api/notes/{id}",
            get(get_note_handler)
                .patch(update_note_handler)
                .delete(delete_note_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_note(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({
            "title": "Groceries",
            "body": "milk, eggs"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_i64());
    assert_eq!(body["title"], "Groceries");
    assert_eq!(body["body"], "milk, eggs");
    assert!(body["category_id"].is_null());
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_create_note_with_category(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let category = common::seed_category(&pool, owner, "travel").await;

    let server = make_server(pool);
    let response = server
        .post("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({
            "title": "Trip",
            "body": "pack bags",
            "category_id": category
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["category_id"], category);
    assert_eq!(body["category"], "travel");
}

#[sqlx::test]
async fn test_create_note_unknown_category(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({
            "title": "Trip",
            "body": "pack bags",
            "category_id": 9999
        }))
        .await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Category not found");
}

#[sqlx::test]
async fn test_create_note_foreign_category_rejected(pool: SqlitePool) {
    let other = common::seed_user(&pool, "bob", "builder1234").await;
    let foreign = common::seed_category(&pool, other, "secret").await;
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({
            "title": "Trip",
            "body": "pack bags",
            "category_id": foreign
        }))
        .await;

    // Another user's category is indistinguishable from a missing one.
    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_create_note_invalid_image_url(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({
            "title": "Trip",
            "body": "pack bags",
            "image_url": "not-a-url"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_notes_require_bearer_token(pool: SqlitePool) {
    let server = make_server(pool);
    let response = server
        .post("/api/notes")
        .json(&json!({
            "title": "Groceries",
            "body": "milk"
        }))
        .await;

    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Could not validate credentials");
}

// ─── List ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_notes_pagination(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    common::seed_note(&pool, owner, "first", "1", None).await;
    common::seed_note(&pool, owner, "second", "2", None).await;
    common::seed_note(&pool, owner, "third", "3", None).await;

    let server = make_server(pool);
    let token = common::token_for("alice");

    let response = server
        .get("/api/notes")
        .authorization_bearer(&token)
        .add_query_param("page", 1)
        .add_query_param("page_size", 2)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["page_size"], 2);
    assert_eq!(body["pagination"]["total"], 3);

    // Newest first: the last page holds the oldest note.
    let response = server
        .get("/api/notes")
        .authorization_bearer(&token)
        .add_query_param("page", 2)
        .add_query_param("page_size", 2)
        .await;

    let body = response.json::<serde_json::Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "first");
}

#[sqlx::test]
async fn test_list_notes_search(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    common::seed_note(&pool, owner, "Grocery run", "milk", None).await;
    common::seed_note(&pool, owner, "Trip plan", "pack", None).await;

    let server = make_server(pool);
    let response = server
        .get("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .add_query_param("q", "grocery")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Grocery run");
    assert_eq!(body["pagination"]["total"], 1);
}

#[sqlx::test]
async fn test_list_notes_by_category(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let travel = common::seed_category(&pool, owner, "travel").await;
    common::seed_note(&pool, owner, "Trip", "pack", Some(travel)).await;
    common::seed_note(&pool, owner, "Groceries", "milk", None).await;

    let server = make_server(pool);
    let response = server
        .get("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .add_query_param("category_id", travel)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Trip");
    assert_eq!(items[0]["category"], "travel");
}

#[sqlx::test]
async fn test_list_notes_excludes_other_users(pool: SqlitePool) {
    let other = common::seed_user(&pool, "bob", "builder1234").await;
    common::seed_note(&pool, other, "Bob's note", "hidden", None).await;
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .get("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
    assert_eq!(body["pagination"]["total"], 0);
}

#[sqlx::test]
async fn test_list_notes_page_size_capped(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .get("/api/notes")
        .authorization_bearer(common::token_for("alice"))
        .add_query_param("page_size", 101)
        .await;

    response.assert_status_bad_request();
}

// ─── Get / Patch / Delete ────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_note_of_another_user(pool: SqlitePool) {
    let other = common::seed_user(&pool, "bob", "builder1234").await;
    let note = common::seed_note(&pool, other, "Bob's note", "hidden", None).await;
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .get(&format!("/api/notes/{note}"))
        .authorization_bearer(common::token_for("alice"))
        .await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Note not found");
}

#[sqlx::test]
async fn test_update_note_title_only(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let note = common::seed_note(&pool, owner, "Groceries", "milk, eggs", None).await;

    let server = make_server(pool);
    let response = server
        .patch(&format!("/api/notes/{note}"))
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "title": "Groceries (updated)" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["title"], "Groceries (updated)");
    assert_eq!(body["body"], "milk, eggs");
}

#[sqlx::test]
async fn test_update_note_clear_category_with_null(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let travel = common::seed_category(&pool, owner, "travel").await;
    let note = common::seed_note(&pool, owner, "Trip", "pack", Some(travel)).await;

    let server = make_server(pool);
    let response = server
        .patch(&format!("/api/notes/{note}"))
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({ "category_id": null }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["category_id"].is_null());
    assert!(body["category"].is_null());
}

#[sqlx::test]
async fn test_update_note_empty_patch(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let note = common::seed_note(&pool, owner, "Groceries", "milk", None).await;

    let server = make_server(pool);
    let response = server
        .patch(&format!("/api/notes/{note}"))
        .authorization_bearer(common::token_for("alice"))
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "No fields provided for update");
}

#[sqlx::test]
async fn test_delete_note(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let note = common::seed_note(&pool, owner, "Groceries", "milk", None).await;

    let server = make_server(pool);
    let token = common::token_for("alice");

    server
        .delete(&format!("/api/notes/{note}"))
        .authorization_bearer(&token)
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    // Second delete returns 404, already gone.
    server
        .delete(&format!("/api/notes/{note}"))
        .authorization_bearer(&token)
        .await
        .assert_status_not_found();
}
