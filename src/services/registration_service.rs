//! Registration service - creates new user accounts.
//!
//! Pipeline per request, stopping at the first failure:
//! validate → check uniqueness → create → respond.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::config::{account_created_message, MSG_CREDENTIALS_REQUIRED};
use crate::domain::{RegistrationRequest, UserAccount};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Outcome of a successful registration
#[derive(Debug, Clone)]
pub struct SuccessInfo {
    pub message: String,
    pub account: UserAccount,
}

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new account.
    ///
    /// # Errors
    /// * [`AppError::Validation`] when the username or password is missing or empty
    /// * [`AppError::DuplicateUsername`] when the username is taken, whether
    ///   detected before the write or by the store during it
    /// * [`AppError::Database`] for any other store failure
    async fn register(&self, request: RegistrationRequest) -> AppResult<SuccessInfo>;
}

/// Concrete implementation of RegistrationService over a user repository.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
}

impl Registrar {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, request: RegistrationRequest) -> AppResult<SuccessInfo> {
        if request.validate().is_err() {
            tracing::debug!("Registration rejected: missing credentials");
            return Err(AppError::validation(MSG_CREDENTIALS_REQUIRED));
        }
        let RegistrationRequest {
            username: Some(username),
            email,
            password: Some(password),
        } = request
        else {
            return Err(AppError::validation(MSG_CREDENTIALS_REQUIRED));
        };

        if self.users.exists_by_username(&username).await? {
            tracing::debug!(%username, "Registration rejected: username taken");
            return Err(AppError::DuplicateUsername);
        }

        // The store rejects a duplicate that slipped past the check above
        let account = self.users.create_user(username, email, password).await?;

        tracing::info!(username = %account.username, user_id = %account.id, "User registered");

        Ok(SuccessInfo {
            message: account_created_message(&account.username),
            account,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::{always, eq};
    use secrecy::ExposeSecret;

    fn account(username: &str) -> UserAccount {
        UserAccount::new(username.to_string(), None, "$argon2id$hash".to_string())
    }

    fn registrar(repo: MockUserRepository) -> Registrar {
        Registrar::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create_user()
            .withf(|username, email, password| {
                username == "alice"
                    && email.as_deref() == Some("alice@example.com")
                    && password.expose_secret() == "hunter2"
            })
            .times(1)
            .returning(|username, _, _| Ok(account(&username)));

        let info = registrar(repo)
            .register(RegistrationRequest::new(
                "alice",
                Some("alice@example.com".into()),
                "hunter2",
            ))
            .await
            .unwrap();

        assert_eq!(info.message, "User alice created successfully");
        assert_eq!(info.account.username, "alice");
    }

    #[tokio::test]
    async fn test_missing_credentials_never_touch_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().never();
        repo.expect_create_user().never();
        let service = registrar(repo);

        let cases = [
            RegistrationRequest::default(),
            RegistrationRequest::new("", None, "x"),
            RegistrationRequest::new("alice", None, ""),
            RegistrationRequest {
                username: Some("alice".into()),
                ..Default::default()
            },
        ];

        for request in cases {
            let err = service.register(request).await.unwrap_err();
            assert!(matches!(&err, AppError::Validation(msg) if msg == MSG_CREDENTIALS_REQUIRED));
        }
    }

    #[tokio::test]
    async fn test_existing_username_is_rejected_without_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username()
            .withf(|username| username == "alice")
            .returning(|_| Ok(true));
        repo.expect_create_user().never();
        let service = registrar(repo);

        // Same error on every attempt
        for _ in 0..2 {
            let result = service
                .register(RegistrationRequest::new("alice", None, "y"))
                .await;
            assert!(matches!(result, Err(AppError::DuplicateUsername)));
        }
    }

    #[tokio::test]
    async fn test_duplicate_detected_at_write_time() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username().returning(|_| Ok(false));
        repo.expect_create_user()
            .with(eq("alice".to_string()), eq(None::<String>), always())
            .returning(|_, _, _| Err(AppError::DuplicateUsername));

        let result = registrar(repo)
            .register(RegistrationRequest::new("alice", None, "pw"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateUsername)));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_username()
            .returning(|_| Err(AppError::Database(sea_orm::DbErr::Custom("down".into()))));
        repo.expect_create_user().never();

        let result = registrar(repo)
            .register(RegistrationRequest::new("alice", None, "pw"))
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
