use crate::domain::users::{User, UserRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Password hashes never leave the presentation layer; the projection
    /// there drops them, and `User`'s serde impl skips the field besides.
    pub async fn execute(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repo.find_all().await?)
    }
}
