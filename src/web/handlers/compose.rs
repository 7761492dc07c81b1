//! Note composer page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::api::middleware::CurrentUser;
use crate::domain::entities::Category;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the note composer page.
///
/// Renders `templates/compose.html` with the user's categories for the
/// category selector.
#[derive(Template, WebTemplate)]
#[template(path = "compose.html")]
pub struct ComposeTemplate {
    pub username: String,
    pub categories: Vec<Category>,
    pub error: Option<String>,
}

/// Form body for `POST /notes`.
///
/// Browser selects submit empty strings for unset optional fields, so the
/// optional fields arrive as strings and are normalized in the handler.
#[derive(Debug, Deserialize)]
pub struct ComposeForm {
    pub title: String,
    pub body: String,
    pub category_id: Option<String>,
    pub image_url: Option<String>,
}

/// Renders the note composer.
///
/// # Endpoint
///
/// `GET /notes`
pub async fn compose_page_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError> {
    let categories = state.note_service.list_categories(user.id).await?;

    Ok(ComposeTemplate {
        username: user.username,
        categories,
        error: None,
    })
}

/// Handles a composer form submission.
///
/// # Endpoint
///
/// `POST /notes`
///
/// # Behavior
///
/// On success redirects `303` to `/`. On a rejected note (empty title,
/// foreign category) re-renders the composer with the error text.
pub async fn compose_submit_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(payload): Form<ComposeForm>,
) -> Result<Response, AppError> {
    let category_id = payload
        .category_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<i64>)
        .transpose()
        .map_err(|_| AppError::bad_request("Invalid category selection", json!({})))?;

    let image_url = payload.image_url.as_deref().filter(|s| !s.is_empty());

    let result = if payload.title.trim().is_empty() {
        Err(AppError::bad_request("Title is required", json!({})))
    } else {
        state
            .note_service
            .create_note(user.id, payload.title.trim(), &payload.body, category_id, image_url)
            .await
    };

    match result {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(AppError::Validation { message, .. }) | Err(AppError::NotFound { message, .. }) => {
            let categories = state.note_service.list_categories(user.id).await?;
            Ok(ComposeTemplate {
                username: user.username,
                categories,
                error: Some(message),
            }
            .into_response())
        }
        Err(e) => Err(e),
    }
}
