mod common;

use axum::http::StatusCode;
use axum::middleware;
use axum_test::TestServer;
use notes_app::web;
use serde_json::json;
use sqlx::SqlitePool;

/// Build a test server with the full web UI: cookie-protected pages plus the
/// public login/logout routes, with a cookie jar so sessions persist across
/// requests.
fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web::middleware::web_auth::layer,
        ))
        .merge(web::routes::public_routes())
        .with_state(state);

    let mut server = TestServer::new(app).unwrap();
    server.save_cookies();
    server
}

async fn login(server: &TestServer, username: &str, password: &str) {
    server
        .post("/login")
        .form(&json!({ "username": username, "password": password }))
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

// ─── Session handling ────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_home_requires_session(pool: SqlitePool) {
    let server = make_server(pool);
    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[sqlx::test]
async fn test_tampered_cookie_redirects_to_login(pool: SqlitePool) {
    let server = make_server(pool);
    let response = server
        .get("/")
        .add_header("cookie", "access_token=\"Bearer garbage\"")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[sqlx::test]
async fn test_login_page_renders_form(pool: SqlitePool) {
    let server = make_server(pool);
    let response = server.get("/login").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"id="login-form""#));
    assert!(html.contains(r#"id="login-container""#));
    assert!(html.contains(r#"id="error-message""#));
}

#[sqlx::test]
async fn test_login_wrong_credentials(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/login")
        .form(&json!({ "username": "alice", "password": "wrong-pass" }))
        .await;

    // Re-rendered page, not a redirect.
    response.assert_status_ok();
    assert!(response.text().contains("Invalid credentials"));
}

#[sqlx::test]
async fn test_login_sets_session_cookie(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    let response = server
        .post("/login")
        .form(&json!({ "username": "alice", "password": "w0nderland" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();
    assert!(cookie.starts_with(r#"access_token="Bearer "#), "{cookie}");
    assert!(cookie.contains("HttpOnly"));
}

#[sqlx::test]
async fn test_logout_clears_cookie(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    login(&server, "alice", "w0nderland").await;

    let response = server.get("/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");

    let cookie = response.header("set-cookie");
    assert!(cookie.to_str().unwrap().contains("Max-Age=0"));

    // The cleared cookie no longer opens the home page.
    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
}

// ─── Pages ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_home_lists_notes_with_toggle_controls(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    common::seed_note(&pool, owner, "Groceries", "milk, eggs", None).await;

    let server = make_server(pool);
    login(&server, "alice", "w0nderland").await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Log out (alice)"));
    assert!(html.contains(r#"<span class="note-title">Groceries</span>"#));
    // The markup contract the bundled toggle client binds to: a toggle
    // button immediately followed by its hidden content block.
    assert!(html.contains(r#"<button class="toggle-note" type="button">Show</button>"#));
    assert!(html.contains(r#"<div class="note-body" style="display:none">"#));
}

#[sqlx::test]
async fn test_home_empty_state(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    login(&server, "alice", "w0nderland").await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("No notes yet."));
}

#[sqlx::test]
async fn test_compose_page_lists_categories(pool: SqlitePool) {
    let owner = common::seed_user(&pool, "alice", "w0nderland").await;
    let category = common::seed_category(&pool, owner, "travel").await;

    let server = make_server(pool);
    login(&server, "alice", "w0nderland").await;

    let response = server.get("/notes").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Signed in as alice"));
    assert!(html.contains(&format!(r#"<option value="{category}">travel</option>"#)));
}

#[sqlx::test]
async fn test_compose_creates_note(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    login(&server, "alice", "w0nderland").await;

    let response = server
        .post("/notes")
        .form(&json!({
            "title": "Groceries",
            "body": "milk, eggs",
            "category_id": "",
            "image_url": ""
        }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let response = server.get("/").await;
    assert!(response.text().contains("Groceries"));
}

#[sqlx::test]
async fn test_compose_requires_title(pool: SqlitePool) {
    common::seed_user(&pool, "alice", "w0nderland").await;

    let server = make_server(pool);
    login(&server, "alice", "w0nderland").await;

    let response = server
        .post("/notes")
        .form(&json!({
            "title": "",
            "body": "milk, eggs",
            "category_id": "",
            "image_url": ""
        }))
        .await;

    // Re-rendered composer with the error line.
    response.assert_status_ok();
    assert!(response.text().contains("Title is required"));
}
