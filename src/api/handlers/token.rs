//! Handler for the credential exchange endpoint.

use axum::{Form, Json, extract::State};

use crate::api::dto::token::{TokenRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges a username and password for a bearer access token.
///
/// # Endpoint
///
/// `POST /token`
///
/// # Request Body
///
/// Form-encoded (`application/x-www-form-urlencoded`), the content type
/// browsers produce for login forms:
///
/// ```text
/// username=alice&password=w0nderland
/// ```
///
/// # Response
///
/// ```json
/// {
///   "access_token": "<jwt>",
///   "token_type": "bearer"
/// }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized with the message `Incorrect username or password`
/// for unknown usernames and wrong passwords alike.
pub async fn token_handler(
    State(state): State<AppState>,
    Form(payload): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse::bearer(token)))
}
