//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered user account.
///
/// `password_hash` is a salted HMAC digest produced by
/// [`crate::utils::password::hash_password`]; raw passwords are never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        username: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(1, "alice".to_string(), "v1$00$11".to_string(), now);

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "v1$00$11");
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn test_new_user_creation() {
        let new_user = NewUser {
            username: "bob".to_string(),
            password_hash: "v1$aa$bb".to_string(),
        };

        assert_eq!(new_user.username, "bob");
        assert_eq!(new_user.password_hash, "v1$aa$bb");
    }
}
