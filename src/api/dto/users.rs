//! DTOs for user registration and listing.

use crate::domain::entities::User;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for username validation.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap());

/// Request body for `POST /api/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account name, unique across the service.
    #[validate(length(min = 3, max = 64))]
    #[validate(regex(
        path = "*USERNAME_REGEX",
        message = "Username may only contain letters, digits, '_', '.' and '-'"
    ))]
    pub username: String,

    /// Plaintext password; hashed before storage, never returned.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Public view of a user account.
///
/// Deliberately omits the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
