//! User service - handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Get user by email
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, new_user: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn create_user(&self, new_user: CreateUser) -> AppResult<User> {
        // Check if email already exists
        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        self.repo.create(new_user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn test_user(id: i32) -> User {
        User {
            id,
            name: "Test Guest".to_string(),
            email: "guest@example.com".to_string(),
            password: "password".to_string(),
        }
    }

    #[tokio::test]
    async fn get_user_returns_found_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(test_user(id))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user(7).await.unwrap();

        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(7).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn get_user_by_email_returns_found_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(eq("guest@example.com"))
            .returning(|_| Ok(Some(test_user(3))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user_by_email("guest@example.com").await.unwrap();

        assert_eq!(user.email, "guest@example.com");
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(test_user(1))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(CreateUser {
                name: "Another".to_string(),
                email: "guest@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_user_inserts_when_email_is_free() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|new_user| {
                Ok(User {
                    id: 11,
                    name: new_user.name,
                    email: new_user.email,
                    password: new_user.password,
                })
            });

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(CreateUser {
                name: "New Guest".to_string(),
                email: "new@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 11);
        assert_eq!(user.email, "new@example.com");
    }
}
