//! User account domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered user account
#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a new active account with a fresh identifier
    pub fn new(username: String, email: Option<String>, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let account = UserAccount::new("alice".into(), None, "$argon2id$...".into());

        assert!(account.is_active);
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_serialization_omits_password_hash() {
        let account = UserAccount::new(
            "alice".into(),
            Some("alice@example.com".into()),
            "$argon2id$v=19$secret".into(),
        );

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "alice@example.com");
    }
}
