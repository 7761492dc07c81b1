//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AuthService, NoteService, UserService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    SqliteCategoryRepository, SqliteNoteRepository, SqliteUserRepository,
};

/// State shared across all request handlers.
///
/// Cheap to clone: the pool and every service are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub auth_service: Arc<AuthService<SqliteUserRepository>>,
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub note_service: Arc<NoteService<SqliteNoteRepository, SqliteCategoryRepository>>,
}

impl AppState {
    /// Wires repositories and services around the given pool.
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        let pool = Arc::new(db.clone());
        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let note_repository = Arc::new(SqliteNoteRepository::new(pool.clone()));
        let category_repository = Arc::new(SqliteCategoryRepository::new(pool));

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            config.token_signing_secret.clone(),
            config.access_token_expire_minutes,
        ));
        let user_service = Arc::new(UserService::new(
            user_repository,
            config.token_signing_secret.clone(),
        ));
        let note_service = Arc::new(NoteService::new(note_repository, category_repository));

        Self {
            db,
            auth_service,
            user_service,
            note_service,
        }
    }
}
