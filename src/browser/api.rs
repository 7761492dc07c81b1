//! Async client for the credential-exchange endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

/// Path of the credential-exchange endpoint, relative to the page origin.
pub const TOKEN_PATH: &str = "/token";

/// Default request timeout. A submission that outlives it resolves to
/// [`TokenError::Request`] instead of hanging the form forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of a token request, mirroring the two user-visible error
/// paths of the login form.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The endpoint answered with a non-success status and a JSON body.
    #[error("token endpoint rejected credentials ({status})")]
    Rejected {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// Everything else: network failure, timeout, or a body (success or
    /// error) that is not the JSON shape it should be.
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct TokenResponseBody {
    access_token: String,
}

/// HTTP client for `POST /token`.
///
/// Sends credentials form-encoded, the content type browser login forms
/// produce, and extracts the `access_token` field from the JSON response.
pub struct TokenClient {
    http: reqwest::Client,
    token_url: String,
    timeout: Duration,
}

impl TokenClient {
    /// Creates a client for the token endpoint of `origin`
    /// (e.g. `http://127.0.0.1:3000`).
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            http: reqwest::Client::new(),
            token_url: format!("{}{}", origin.trim_end_matches('/'), TOKEN_PATH),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exchanges credentials for an access token. Issues exactly one POST
    /// per call.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Rejected`] for a non-success status with a JSON body
    ///   (the body is carried for diagnostic logging, not interpreted)
    /// - [`TokenError::Request`] for transport failures, timeouts, non-JSON
    ///   bodies, and success bodies missing `access_token`
    pub async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, TokenError> {
        let response = self
            .http
            .post(&self.token_url)
            .timeout(self.timeout)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // A rejection body that fails to parse as JSON degrades to the
            // Request variant.
            let body: serde_json::Value = response.json().await?;
            return Err(TokenError::Rejected { status, body });
        }

        let body: TokenResponseBody = response.json().await?;
        Ok(body.access_token)
    }

    /// The absolute URL this client posts to.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_url_joins_origin_and_path() {
        let client = TokenClient::new("http://127.0.0.1:3000");
        assert_eq!(client.token_url(), "http://127.0.0.1:3000/token");

        let trailing = TokenClient::new("http://127.0.0.1:3000/");
        assert_eq!(trailing.token_url(), "http://127.0.0.1:3000/token");
    }

    #[test]
    fn test_default_timeout() {
        let client = TokenClient::new("http://localhost");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        let short = TokenClient::new("http://localhost").with_timeout(Duration::from_millis(50));
        assert_eq!(short.timeout, Duration::from_millis(50));
    }
}
