use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateAdmin, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Provision an administrator account with a hashed password
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_admin(&self, input: CreateAdmin) -> UserResult<UserResponse> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let hashed_password = hash_password(&input.password)?;
        let user = User::new_admin(input.username, input.email, hashed_password);

        let created = self.repository.create(user).await?;
        Ok(created.into())
    }
}

/// Argon2id with a fresh random salt, as a PHC string.
fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::repository::MockUserRepository;
    use argon2::{PasswordHash, PasswordVerifier};
    use std::sync::Mutex;

    fn admin(password: &str) -> CreateAdmin {
        CreateAdmin {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_short_password_never_reaches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let err = service.create_admin(admin("short")).await.unwrap_err();

        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_stored_password_is_a_verifiable_hash() {
        let stored = Arc::new(Mutex::new(None::<User>));
        let captured = Arc::clone(&stored);

        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().times(1).returning(move |user| {
            *captured.lock().unwrap() = Some(user.clone());
            Ok(user)
        });

        let service = UserService::new(mock_repo);
        let response = service.create_admin(admin("correct horse")).await.unwrap();

        assert_eq!(response.username, "admin");
        assert_eq!(response.role, Role::Admin);

        let user = stored.lock().unwrap().take().unwrap();
        assert_ne!(user.hashed_password, "correct horse");
        assert!(user.hashed_password.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&user.hashed_password).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"correct horse", &parsed)
                .is_ok()
        );
    }

    #[test]
    fn test_salts_differ_between_calls() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_duplicate_is_propagated() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(UserError::Duplicate("email")));

        let service = UserService::new(mock_repo);
        let err = service.create_admin(admin("long-enough")).await.unwrap_err();
        assert!(matches!(err, UserError::Duplicate("email")));
    }
}
