use crate::domain::password::PasswordHashingService;
use crate::domain::users::{NewUser, Role, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "mreyes", min_length = 1)]
    pub username: String,
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Reyes", min_length = 1)]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "strongpassword", min_length = 8)]
    pub password: String,
    pub role: Role,
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHashingService>,
}

impl CreateUserUseCase {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
        }
    }

    #[tracing::instrument(skip(self, req), fields(username = %req.username))]
    pub async fn execute(&self, req: CreateUserRequest) -> Result<User, AppError> {
        if self.repo.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let password_hash = self.password_hasher.hash_password(&req.password)?;

        let new_user = NewUser {
            username: req.username,
            name: req.name,
            password_hash,
            role: req.role,
        };

        Ok(self.repo.create(new_user).await?)
    }
}
