//! Salted password hashing built on keyed HMAC-SHA256.
//!
//! Stored hashes have the form `v1$<salt-hex>$<mac-hex>` where the MAC is
//! computed over `salt || password` and keyed by the server signing secret.
//! An attacker with read-only access to the database cannot verify guesses
//! without the server-side secret.

use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SALT_LEN: usize = 16;
const SCHEME: &str = "v1";

/// Hashes a password with a fresh random salt.
///
/// Returns a `v1$<salt-hex>$<mac-hex>` string suitable for storage.
pub fn hash_password(password: &str, secret: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);

    let mac = compute_mac(password, &salt, secret);

    format!("{SCHEME}${}${}", hex::encode(salt), hex::encode(mac))
}

/// Verifies a password against a stored hash in constant time.
///
/// Returns `false` for wrong passwords and for stored values that do not
/// parse as a known scheme.
pub fn verify_password(password: &str, secret: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(scheme), Some(salt_hex), Some(mac_hex)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if scheme != SCHEME {
        return false;
    }

    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(mac_hex) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(&salt);
    mac.update(password.as_bytes());

    mac.verify_slice(&expected).is_ok()
}

fn compute_mac(password: &str, salt: &[u8], secret: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(salt);
    mac.update(password.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
