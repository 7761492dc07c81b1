//! User account management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password;
use serde_json::json;

/// Service for registering and listing user accounts.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Registers a new user account.
    ///
    /// The password is hashed before it reaches storage; plaintext is never
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the message
    /// `Username already registered` if the username is taken.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if self.repository.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already registered",
                json!({ "username": username }),
            ));
        }

        let password_hash = password::hash_password(password, &self.signing_secret);
        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        metrics::counter!("users_registered_total").increment(1);
        tracing::info!(username = %user.username, "user registered");

        Ok(user)
    }

    /// Returns all registered users.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }
}
