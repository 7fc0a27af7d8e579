use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    user_query: DynUserQueryRepository,
    user_command: DynUserCommandRepository,
}

impl AuthService {
    pub fn new(
        hash: DynHashing,
        jwt: DynJwtService,
        user_query: DynUserQueryRepository,
        user_command: DynUserCommandRepository,
    ) -> Self {
        Self {
            hash,
            jwt,
            user_query,
            user_command,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let taken = self
            .user_query
            .exists_by_username_or_email(&req.username, &req.email)
            .await
            .map_err(ServiceError::Repo)?;

        if taken {
            warn!("Registration rejected, username or email taken");
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                "username or email already taken".to_string(),
            )));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;
        let user = self
            .user_command
            .create_user(req, &password_hash)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ Registered user {}", user.id);
        Ok(ApiResponse::success(
            "User registered",
            UserResponse::from(user),
        ))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user = self
            .user_query
            .find_by_email(&req.email)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&user.password, &req.password)
            .await?;

        let access_token = self.jwt.generate_token(user.id as i64, "access")?;

        info!("✅ User {} logged in", user.id);
        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse::bearer(access_token),
        ))
    }

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success("Current user", UserResponse::from(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{UserCommandRepositoryTrait, UserQueryRepositoryTrait};
    use crate::config::{Hashing, JwtConfig};
    use crate::model::User;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryUsers {
        users: Mutex<Vec<User>>,
    }

    impl InMemoryUsers {
        fn with_user(username: &str, email: &str, password_hash: &str) -> Self {
            let store = Self::default();
            store.users.lock().unwrap().push(User {
                id: 1,
                username: username.to_string(),
                email: email.to_string(),
                password: password_hash.to_string(),
                role: "user".to_string(),
                created_at: None,
            });
            store
        }
    }

    #[async_trait]
    impl UserQueryRepositoryTrait for InMemoryUsers {
        async fn find_by_id(&self, id: i32) -> Result<User, RepositoryError> {
            self.users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn exists_by_username_or_email(
            &self,
            username: &str,
            email: &str,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| u.username == username || u.email == email))
        }
    }

    #[async_trait]
    impl UserCommandRepositoryTrait for InMemoryUsers {
        async fn create_user(
            &self,
            req: &RegisterRequest,
            password_hash: &str,
        ) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            let user = User {
                id: users.len() as i32 + 1,
                username: req.username.clone(),
                email: req.email.clone(),
                password: password_hash.to_string(),
                role: "user".to_string(),
                created_at: None,
            };
            users.push(user.clone());
            Ok(user)
        }
    }

    fn service(store: Arc<InMemoryUsers>) -> AuthService {
        AuthService::new(
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
            store.clone(),
            store,
        )
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let store = Arc::new(InMemoryUsers::with_user("mina", "mina@example.com", "x"));
        let auth = service(store);

        let err = auth
            .register(&RegisterRequest {
                username: "other".into(),
                email: "mina@example.com".into(),
                password: "secret123".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn login_round_trip_issues_verifiable_token() {
        let store = Arc::new(InMemoryUsers::default());
        let auth = service(store);

        auth.register(&RegisterRequest {
            username: "mina".into(),
            email: "mina@example.com".into(),
            password: "secret123".into(),
        })
        .await
        .expect("register");

        let response = auth
            .login(&LoginRequest {
                email: "mina@example.com".into(),
                password: "secret123".into(),
            })
            .await
            .expect("login");

        assert_eq!(response.data.token_type, "bearer");
        let jwt = JwtConfig::new("test-secret");
        use crate::abstract_trait::JwtServiceTrait;
        assert_eq!(jwt.verify_token(&response.data.access_token, "access").unwrap(), 1);
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let store = Arc::new(InMemoryUsers::default());
        let auth = service(store);

        auth.register(&RegisterRequest {
            username: "mina".into(),
            email: "mina@example.com".into(),
            password: "secret123".into(),
        })
        .await
        .expect("register");

        let err = auth
            .login(&LoginRequest {
                email: "mina@example.com".into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}
