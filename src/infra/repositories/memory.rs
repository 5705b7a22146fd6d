//! In-memory user repository.
//!
//! Used by `serve --in-memory` and by tests that need a real store
//! without PostgreSQL. State is lost on shutdown.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::{Password, UserAccount};
use crate::errors::{AppError, AppResult};

/// Accounts keyed by username
#[derive(Default)]
pub struct MemoryUserStore {
    accounts: RwLock<HashMap<String, UserAccount>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    /// Look up an account by exact username
    pub async fn get(&self, username: &str) -> Option<UserAccount> {
        self.accounts.read().await.get(username).cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.accounts.read().await.contains_key(username))
    }

    async fn create_user(
        &self,
        username: String,
        email: Option<String>,
        password: SecretString,
    ) -> AppResult<UserAccount> {
        // Hash outside the lock; uniqueness is decided by the insert below.
        let password_hash = Password::hash_async(password).await?.into_string();

        let mut accounts = self.accounts.write().await;
        match accounts.entry(username) {
            Entry::Occupied(_) => Err(AppError::DuplicateUsername),
            Entry::Vacant(slot) => {
                let account = UserAccount::new(slot.key().clone(), email, password_hash);
                Ok(slot.insert(account).clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = MemoryUserStore::new();
        assert!(!store.exists_by_username("alice").await.unwrap());

        let account = store
            .create_user("alice".into(), Some("a@example.com".into()), secret("hunter2"))
            .await
            .unwrap();

        assert!(store.exists_by_username("alice").await.unwrap());
        assert_eq!(store.get("alice").await.unwrap().id, account.id);
        assert_ne!(account.password_hash, "hunter2");
        assert!(Password::from_hash(account.password_hash).verify("hunter2"));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        store.create_user("bob".into(), None, secret("one")).await.unwrap();

        let result = store.create_user("bob".into(), None, secret("two")).await;

        assert!(matches!(result, Err(AppError::DuplicateUsername)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_username_match_is_exact() {
        let store = MemoryUserStore::new();
        store.create_user("Carol".into(), None, secret("pw")).await.unwrap();

        assert!(!store.exists_by_username("carol").await.unwrap());
        assert!(!store.is_empty().await);
    }
}
