//! Handlers for category endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::categories::{CategoryRequest, CategoryResponse};
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a category for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/categories`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the caller already has a category with this name.
pub async fn create_category_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    payload.validate()?;

    let category = state
        .note_service
        .create_category(user.id, &payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// Lists the authenticated user's categories in name order.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn list_categories_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.note_service.list_categories(user.id).await?;

    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Renames a category.
///
/// # Endpoint
///
/// `PATCH /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the category does not exist or belongs to
/// another user.
/// Returns 409 Conflict if the new name is already taken by the caller.
pub async fn rename_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    payload.validate()?;

    let category = state
        .note_service
        .rename_category(user.id, id, &payload.name)
        .await?;

    Ok(Json(CategoryResponse::from(category)))
}

/// Deletes a category. Notes filed under it are kept and become
/// uncategorized.
///
/// # Endpoint
///
/// `DELETE /api/categories/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the category does not exist or belongs to
/// another user.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.note_service.delete_category(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
