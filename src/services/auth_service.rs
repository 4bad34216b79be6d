use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::UserRepository,
};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates a new account. The plaintext password only ever exists in the
    /// request; what is stored is the argon2 hash.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        let email = request.email.to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "User with this email already exists".to_string(),
            ));
        }

        if self
            .users
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "Username is already taken".to_string(),
            ));
        }

        // Hashing is CPU-bound; keep it off the request-dispatch path
        let plaintext = request.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
            .await
            .map_err(|e| AppError::InternalError(format!("Hashing task failed: {}", e)))??;

        let user = User::new(
            &request.username,
            &email,
            &password_hash,
            request.role.unwrap_or_default(),
        );

        self.users.create(user).await
    }

    /// Checks credentials and hands back the matching user. Unknown email and
    /// wrong password are reported separately, matching the HTTP contract.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email.to_lowercase())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let plaintext = request.password;
        let stored_hash = user.password_hash.clone();
        let matches =
            tokio::task::spawn_blocking(move || password::verify_password(&plaintext, &stored_hash))
                .await
                .map_err(|e| AppError::InternalError(format!("Hashing task failed: {}", e)))??;

        if !matches {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::UserRole,
        repositories::MockUserRepository,
        test_utils::fixtures::{register_request, test_user_with_password},
    };

    #[actix_web::test]
    async fn test_register_hashes_password_before_storage() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create().returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(repo));
        let user = service.register(register_request("alice", "a@x.com")).await.unwrap();

        assert_ne!(user.password_hash, "pw123");
        assert!(password::verify_password("pw123", &user.password_hash).unwrap());
        assert_eq!(user.role, UserRole::User);
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(test_user_with_password("taken", "a@x.com", "pw123"))));

        let service = AuthService::new(Arc::new(repo));
        let result = service.register(register_request("alice", "a@x.com")).await;

        match result {
            Err(AppError::AlreadyExists(_)) => {}
            _ => panic!("Expected AlreadyExists error"),
        }
    }

    #[actix_web::test]
    async fn test_register_rejects_duplicate_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_username()
            .returning(|_| Ok(Some(test_user_with_password("alice", "other@x.com", "pw123"))));

        let service = AuthService::new(Arc::new(repo));
        let result = service.register(register_request("alice", "a@x.com")).await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_email() {
        let repo = MockUserRepository::new();
        let service = AuthService::new(Arc::new(repo));

        let result = service
            .register(register_request("alice", "not-an-email"))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_login_round_trip() {
        let stored = test_user_with_password("alice", "a@x.com", "pw123");
        let expected_id = stored.id.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(stored.clone())));

        let service = AuthService::new(Arc::new(repo));
        let user = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, expected_id);
    }

    #[actix_web::test]
    async fn test_login_unknown_email_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(repo));
        let result = service
            .login(LoginRequest {
                email: "missing@x.com".to_string(),
                password: "pw123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let stored = test_user_with_password("alice", "a@x.com", "pw123");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(stored.clone())));

        let service = AuthService::new(Arc::new(repo));
        let result = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
