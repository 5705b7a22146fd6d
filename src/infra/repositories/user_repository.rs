//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use secrecy::SecretString;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Password, UserAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations must enforce username uniqueness atomically in
/// `create_user`: a check via `exists_by_username` followed by a create
/// is racy, so a concurrent duplicate must be rejected at write time
/// with [`AppError::DuplicateUsername`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether an account with exactly this username exists
    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;

    /// Hash the password and persist a new account
    async fn create_user(
        &self,
        username: String,
        email: Option<String>,
        password: SecretString,
    ) -> AppResult<UserAccount>;
}

/// Concrete implementation of UserRepository over SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map insert failures, folding a username constraint violation into
/// the duplicate error the pre-check would have produced.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Username uniqueness violated at insert");
            AppError::DuplicateUsername
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn create_user(
        &self,
        username: String,
        email: Option<String>,
        password: SecretString,
    ) -> AppResult<UserAccount> {
        let password_hash = Password::hash_async(password).await?.into_string();
        let account = UserAccount::new(username, email, password_hash);

        let active_model = ActiveModel {
            id: Set(account.id),
            username: Set(account.username),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            is_active: Set(account.is_active),
            created_at: Set(account.created_at),
            updated_at: Set(account.updated_at),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        Ok(UserAccount::from(model))
    }
}
