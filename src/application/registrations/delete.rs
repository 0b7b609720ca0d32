use crate::domain::registrations::RegistrationRepository;
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteRegistrationUseCase {
    repo: Arc<dyn RegistrationRepository>,
}

impl DeleteRegistrationUseCase {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i64) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Registration not found".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registrations::create::{
        CreateRegistrationRequest, CreateRegistrationUseCase,
    };
    use crate::infrastructure::repositories::mock::MockRegistrationRepository;

    #[tokio::test]
    async fn test_delete_existing_then_missing() {
        let repo = Arc::new(MockRegistrationRepository::default());
        let created = CreateRegistrationUseCase::new(repo.clone())
            .execute(CreateRegistrationRequest {
                first_name: "Ana".to_string(),
                last_name: "Cruz".to_string(),
                email_address: "ana@x.com".to_string(),
                contact_number: "09171234567".to_string(),
                membership: "Member".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let use_case = DeleteRegistrationUseCase::new(repo);
        use_case.execute(created.id).await.unwrap();

        // Second delete of the same id is a 404.
        assert!(matches!(
            use_case.execute(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
