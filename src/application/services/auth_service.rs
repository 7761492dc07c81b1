//! Authentication service for credential exchange and token validation.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::{self, Claims};
use crate::utils::password;
use serde_json::json;

/// Service for exchanging credentials for access tokens and validating them.
///
/// Issued tokens are HS256 JWTs carrying the username and an expiry, signed
/// with the server signing secret. Password verification runs even for
/// unknown usernames so response timing does not reveal which of the two
/// inputs was wrong.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    signing_secret: String,
    token_ttl_minutes: i64,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for account lookups
    /// - `signing_secret` - HMAC key for token signatures and password hashes
    /// - `token_ttl_minutes` - lifetime of issued access tokens
    pub fn new(repository: Arc<R>, signing_secret: String, token_ttl_minutes: i64) -> Self {
        Self {
            repository,
            signing_secret,
            token_ttl_minutes,
        }
    }

    /// Exchanges a username and password for a signed access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the message
    /// `Incorrect username or password` if the username is unknown or the
    /// password does not match.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self.repository.find_by_username(username).await?;

        // Verify against a dummy hash when the user is unknown to keep the
        // timing of both failure cases indistinguishable.
        let verified = match &user {
            Some(user) => {
                password::verify_password(password, &self.signing_secret, &user.password_hash)
            }
            None => {
                let dummy = password::hash_password("", &self.signing_secret);
                password::verify_password(password, &self.signing_secret, &dummy)
            }
        };

        if !verified {
            metrics::counter!("login_attempts_total", "outcome" => "failure").increment(1);
            return Err(AppError::unauthorized(
                "Incorrect username or password",
                json!({}),
            ));
        }

        metrics::counter!("login_attempts_total", "outcome" => "success").increment(1);

        let claims = Claims::new(username, self.token_ttl_minutes);
        Ok(jwt::encode(&claims, &self.signing_secret))
    }

    /// Validates an access token and resolves it to its user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the message
    /// `Could not validate credentials` if the token is malformed, expired,
    /// carries a bad signature, or names a user that no longer exists.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = jwt::decode(token, &self.signing_secret)?;

        self.repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Could not validate credentials", json!({})))
    }
}
