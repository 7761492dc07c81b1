#![allow(dead_code)]

use notes_app::config::Config;
use notes_app::state::AppState;
use notes_app::utils::jwt::{self, Claims};
use notes_app::utils::password::hash_password;
use sqlx::SqlitePool;

/// Signing secret shared by every test. Long enough to pass config
/// validation, stable so seeded password hashes verify at login.
pub const TEST_SECRET: &str = "integration-test-signing-secret-0001";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        token_signing_secret: TEST_SECRET.to_string(),
        access_token_expire_minutes: 30,
        db_max_connections: 5,
        db_connect_timeout: 5,
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, &test_config())
}

/// Mints a bearer token for `username` the way the auth service would.
pub fn token_for(username: &str) -> String {
    jwt::encode(&Claims::new(username, 30), TEST_SECRET)
}

pub async fn seed_user(pool: &SqlitePool, username: &str, password: &str) -> i64 {
    let password_hash = hash_password(password, TEST_SECRET);

    sqlx::query_scalar("INSERT INTO users (username, password_hash) VALUES (?1, ?2) RETURNING id")
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_category(pool: &SqlitePool, owner_id: i64, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, owner_id) VALUES (?1, ?2) RETURNING id")
        .bind(name)
        .bind(owner_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_note(
    pool: &SqlitePool,
    owner_id: i64,
    title: &str,
    body: &str,
    category_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO notes (title, body, category_id, owner_id) VALUES (?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(title)
    .bind(body)
    .bind(category_id)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
