//! Login page and session handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - The login form (`login-form`, inputs `username` / `password`)
/// - The token display container (`login-container`)
/// - The error line (`error-message`), filled when a submission failed
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate { error: None }
}

/// Handles a login form submission.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Behavior
///
/// - Valid credentials: sets the session cookie
///   `access_token="Bearer <jwt>"` (HttpOnly) and redirects `303` to `/`.
/// - Invalid credentials: re-renders the login page with the error text
///   `Invalid credentials`.
///
/// # Errors
///
/// Database failures surface as `500`.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state
        .auth_service
        .login(&payload.username, &payload.password)
        .await
    {
        Ok(token) => {
            // Quoted because the value contains a space; the web_auth
            // middleware strips the quotes and prefix on the way back in.
            let cookie = format!(r#"access_token="Bearer {token}"; Path=/; HttpOnly; SameSite=Lax"#);
            Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
        }
        Err(AppError::Unauthorized { .. }) => Ok(LoginTemplate {
            error: Some("Invalid credentials".to_string()),
        }
        .into_response()),
        Err(e) => Err(e),
    }
}

/// Clears the session cookie and returns to the login page.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler() -> impl IntoResponse {
    let cookie = r#"access_token=""; Path=/; HttpOnly; Max-Age=0"#;
    ([(header::SET_COOKIE, cookie)], Redirect::to("/login"))
}
