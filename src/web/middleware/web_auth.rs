//! Cookie-based authentication middleware for web pages.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::CurrentUser;
use crate::state::AppState;

/// Authenticates page requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: access_token="Bearer <jwt>"
/// ```
///
/// The value may be quoted (it contains a space) and carries the `Bearer `
/// prefix; both are stripped before validation.
///
/// # Authentication Flow
///
/// 1. Extract `access_token` cookie from request
/// 2. Validate the token via [`crate::application::services::AuthService`]
/// 3. On success, insert [`CurrentUser`] and continue to the handler
/// 4. On failure or missing cookie, redirect to `/login`
///
/// # Differences from API Auth
///
/// Unlike the API auth middleware which returns `401 Unauthorized`,
/// this middleware redirects to the login page for a better user experience
/// in a browser context.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some("access_token"), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
        .map(|raw| {
            let unquoted = raw.trim_matches('"');
            unquoted
                .strip_prefix("Bearer ")
                .unwrap_or(unquoted)
                .to_string()
        });

    match token {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(user) => {
                let mut req = req;
                req.extensions_mut().insert(CurrentUser(user));
                Ok(next.run(req).await)
            }
            Err(_) => Err(Redirect::to("/login")),
        },
        None => Err(Redirect::to("/login")),
    }
}
