//! DTOs for the token endpoint.

use serde::{Deserialize, Serialize};

/// Form body for `POST /token`.
///
/// Submitted as `application/x-www-form-urlencoded`, matching what browser
/// login forms and the bundled login client send.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful credential exchange.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Wraps a signed token in the standard bearer envelope.
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
