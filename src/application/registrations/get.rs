use crate::domain::registrations::{Registration, RegistrationRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct GetRegistrationUseCase {
    repo: Arc<dyn RegistrationRepository>,
}

impl GetRegistrationUseCase {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> Result<Registration, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))
    }
}
