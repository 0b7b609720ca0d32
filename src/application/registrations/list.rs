use crate::domain::registrations::{Registration, RegistrationRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct ListRegistrationsUseCase {
    repo: Arc<dyn RegistrationRepository>,
}

impl ListRegistrationsUseCase {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    /// Newest-created first; ordering comes from the store.
    pub async fn execute(&self) -> Result<Vec<Registration>, AppError> {
        Ok(self.repo.find_all().await?)
    }
}
