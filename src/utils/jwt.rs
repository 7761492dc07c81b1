//! Minimal HS256 JSON Web Token encoding and verification.
//!
//! Tokens carry two claims: `sub` (the username) and `exp` (expiry as a unix
//! timestamp). Signatures are HMAC-SHA256 keyed by the server signing secret
//! and verified in constant time.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for.
    pub sub: String,
    /// Expiry as seconds since the unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `sub` expiring `ttl_minutes` from now.
    pub fn new(sub: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            sub: sub.into(),
            exp: (Utc::now() + Duration::minutes(ttl_minutes)).timestamp(),
        }
    }

    /// Returns true if the expiry lies in the past.
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}

/// Encodes claims into a signed `header.payload.signature` token.
pub fn encode(claims: &Claims, secret: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).expect("claims serialize to JSON"));

    let signing_input = format!("{header}.{payload}");

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    format!("{signing_input}.{signature}")
}

/// Verifies a token's signature and expiry, returning its claims.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] with the message
/// `Could not validate credentials` for malformed tokens, bad signatures,
/// and expired tokens. The signature is checked before the payload is
/// parsed, so claims from unverified tokens are never interpreted.
pub fn decode(token: &str, secret: &str) -> Result<Claims, AppError> {
    let invalid = || AppError::unauthorized("Could not validate credentials", json!({}));

    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let signing_input = format!("{header}.{payload}");

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(signing_input.as_bytes());

    let sig_bytes = URL_SAFE_NO_PAD.decode(signature).map_err(|_| invalid())?;
    mac.verify_slice(&sig_bytes).map_err(|_| invalid())?;

    let payload_bytes = URL_SAFE_NO_PAD.decode(payload).map_err(|_| invalid())?;
    let claims: Claims = serde_json::from_slice(&payload_bytes).map_err(|_| invalid())?;

    if claims.is_expired() {
        return Err(AppError::unauthorized(
            "Could not validate credentials",
            json!({ "reason": "token expired" }),
        ));
    }

    Ok(claims)
}
