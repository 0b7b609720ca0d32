use crate::domain::users::{Role, UserRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self), fields(user_id = id))]
    pub async fn execute(&self, id: i64) -> Result<(), AppError> {
        let target = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        // The Administrator count may never reach zero. Checked before the
        // delete so a rejection mutates nothing; the count-then-delete window
        // under concurrent deletes is an accepted gap.
        if target.role == Role::Administrator && self.repo.count_administrators().await? <= 1 {
            return Err(AppError::LastAdministrator);
        }

        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("User not found".to_string()))
        }
    }
}
