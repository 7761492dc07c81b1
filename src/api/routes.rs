//! API route configuration.

use crate::api::handlers::{
    create_category_handler, create_note_handler, delete_category_handler, delete_note_handler,
    get_note_handler, list_categories_handler, list_notes_handler, register_handler,
    rename_category_handler, token_handler, update_note_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Public routes mounted at the root.
///
/// # Endpoints
///
/// - `POST /token` - Exchange credentials for a bearer token
///
/// A credential endpoint; sits behind the strict rate limiter.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/token", post(token_handler))
}

/// Public API routes, nested under `/api` without authentication.
///
/// # Endpoints
///
/// - `POST /api/users` - Register a new account
///
/// Registration is a credential endpoint; it shares the strict rate limiter
/// with `/token`.
pub fn public_api_routes() -> Router<AppState> {
    Router::new().route("/users", post(register_handler))
}

/// Protected API routes, nested under `/api`.
///
/// Protected via [`crate::api::middleware::auth`] (Bearer token required).
///
/// # Endpoints
///
/// - `GET    /api/notes` - List notes (paginated, filterable)
/// - `POST   /api/notes` - Create a note
/// - `GET    /api/notes/{id}` - Fetch a note
/// - `PATCH  /api/notes/{id}` - Partially update a note
/// - `DELETE /api/notes/{id}` - Delete a note
/// - `GET    /api/categories` - List categories
/// - `POST   /api/categories` - Create a category
/// - `PATCH  /api/categories/{id}` - Rename a category
/// - `DELETE /api/categories/{id}` - Delete a category
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes_handler).post(create_note_handler))
        .route(
            "/notes/{id}",
            get(get_note_handler)
                .patch(update_note_handler)
                .delete(delete_note_handler),
        )
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            patch(rename_category_handler).delete(delete_category_handler),
        )
}
