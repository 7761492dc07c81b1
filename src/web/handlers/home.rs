//! Notes home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};

use crate::api::middleware::CurrentUser;
use crate::domain::entities::{Note, NoteFilter};
use crate::error::AppError;
use crate::state::AppState;

/// Page size for the home view; deeper browsing goes through the API.
const HOME_PAGE_LIMIT: i64 = 100;

/// Template for the notes home page.
///
/// Renders `templates/notes.html`: for each note a `toggle-note` button
/// immediately followed by its hidden content block, which is the layout the
/// bundled toggle client binds to.
#[derive(Template, WebTemplate)]
#[template(path = "notes.html")]
pub struct NotesTemplate {
    pub username: String,
    pub notes: Vec<Note>,
}

/// Renders the authenticated user's notes, newest first.
///
/// # Endpoint
///
/// `GET /`
///
/// # Authentication
///
/// Cookie session; unauthenticated requests are redirected to `/login` by
/// the web auth middleware before reaching this handler.
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppError> {
    let (notes, _total) = state
        .note_service
        .list_notes(user.id, NoteFilter::default(), 0, HOME_PAGE_LIMIT)
        .await?;

    Ok(NotesTemplate {
        username: user.username,
        notes,
    })
}
