//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    compose_page_handler, compose_submit_handler, home_handler, login_page_handler,
    login_submit_handler, logout_handler,
};
use axum::{Router, routing::get};

/// Protected page routes requiring a session cookie.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET  /` - Notes home with per-note toggle controls
/// - `GET  /notes` - Note composer
/// - `POST /notes` - Composer form submission
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route(
            "/notes",
            get(compose_page_handler).post(compose_submit_handler),
        )
}

/// Public page routes without authentication.
///
/// # Endpoints
///
/// - `GET  /login` - Login page
/// - `POST /login` - Login form submission (sets the session cookie)
/// - `GET  /logout` - Clears the session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/logout", get(logout_handler))
}
