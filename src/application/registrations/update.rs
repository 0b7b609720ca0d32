use crate::application::registrations::create::CreateRegistrationRequest;
use crate::domain::registrations::{
    Registration, RegistrationRepository, RegistrationStatus, UpdateRegistration,
};
use crate::shared::error::AppError;
use crate::shared::validation::sanitize_text;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Full-field replacement payload. Status is caller-controlled, and
/// confirmed_by is passed through untouched: the store never infers the
/// approving admin's name.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRegistrationRequest {
    #[serde(flatten)]
    pub fields: CreateRegistrationRequest,
    #[schema(example = "Approved")]
    pub status: String,
    pub confirmed_by: Option<String>,
}

pub struct UpdateRegistrationUseCase {
    repo: Arc<dyn RegistrationRepository>,
}

impl UpdateRegistrationUseCase {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(
        &self,
        id: i64,
        req: UpdateRegistrationRequest,
    ) -> Result<Registration, AppError> {
        let clean = req.fields.sanitize();
        let membership = clean.validate()?;

        let status: RegistrationStatus = sanitize_text(&req.status)
            .parse()
            .map_err(AppError::Validation)?;

        let confirmed_by = req
            .confirmed_by
            .map(|name| sanitize_text(&name))
            .filter(|name| !name.is_empty());

        let update = UpdateRegistration {
            first_name: clean.first_name,
            middle_name: (!clean.middle_name.is_empty()).then_some(clean.middle_name),
            last_name: clean.last_name,
            gender: clean.gender,
            date_of_birth: clean.date_of_birth,
            place_of_birth: clean.place_of_birth,
            address: clean.address,
            region: clean.region,
            province: clean.province,
            city: clean.city,
            barangay: clean.barangay,
            chapter: clean.chapter,
            membership,
            payment_amount: membership.fee(),
            status,
            confirmed_by,
            contact_number: clean.contact_number,
            email_address: clean.email_address,
        };

        self.repo
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("Registration not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::registrations::create::CreateRegistrationUseCase;
    use crate::infrastructure::repositories::mock::MockRegistrationRepository;

    fn base_request() -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            first_name: "Ana".to_string(),
            last_name: "Cruz".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            email_address: "ana@x.com".to_string(),
            contact_number: "09171234567".to_string(),
            membership: "Member".to_string(),
            ..Default::default()
        }
    }

    async fn seeded_repo() -> (Arc<MockRegistrationRepository>, i64) {
        let repo = Arc::new(MockRegistrationRepository::default());
        let created = CreateRegistrationUseCase::new(repo.clone())
            .execute(base_request())
            .await
            .unwrap();
        (repo, created.id)
    }

    #[tokio::test]
    async fn test_approve_with_confirmed_by() {
        let (repo, id) = seeded_repo().await;
        let use_case = UpdateRegistrationUseCase::new(repo);

        let req = UpdateRegistrationRequest {
            fields: base_request(),
            status: "Approved".to_string(),
            confirmed_by: Some("Site Admin".to_string()),
        };

        let updated = use_case.execute(id, req).await.unwrap();
        assert_eq!(updated.status, RegistrationStatus::Approved);
        assert_eq!(updated.confirmed_by.as_deref(), Some("Site Admin"));
    }

    #[tokio::test]
    async fn test_approve_without_confirmed_by_stays_unset() {
        // The store does not auto-fill the approving admin; an approval with
        // no confirmed_by supplied simply records none.
        let (repo, id) = seeded_repo().await;
        let use_case = UpdateRegistrationUseCase::new(repo);

        let req = UpdateRegistrationRequest {
            fields: base_request(),
            status: "Approved".to_string(),
            confirmed_by: None,
        };

        let updated = use_case.execute(id, req).await.unwrap();
        assert_eq!(updated.status, RegistrationStatus::Approved);
        assert_eq!(updated.confirmed_by, None);
    }

    #[tokio::test]
    async fn test_changing_membership_rederives_fee() {
        let (repo, id) = seeded_repo().await;
        let use_case = UpdateRegistrationUseCase::new(repo);

        let req = UpdateRegistrationRequest {
            fields: CreateRegistrationRequest {
                membership: "Alumni".to_string(),
                ..base_request()
            },
            status: "Pending".to_string(),
            confirmed_by: None,
        };

        let updated = use_case.execute(id, req).await.unwrap();
        assert_eq!(updated.payment_amount, 1000);
    }

    #[tokio::test]
    async fn test_update_missing_registration_is_not_found() {
        let repo = Arc::new(MockRegistrationRepository::default());
        let use_case = UpdateRegistrationUseCase::new(repo);

        let req = UpdateRegistrationRequest {
            fields: base_request(),
            status: "Pending".to_string(),
            confirmed_by: None,
        };

        assert!(matches!(
            use_case.execute(404, req).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let (repo, id) = seeded_repo().await;
        let use_case = UpdateRegistrationUseCase::new(repo);

        let req = UpdateRegistrationRequest {
            fields: base_request(),
            status: "Archived".to_string(),
            confirmed_by: None,
        };

        assert!(matches!(
            use_case.execute(id, req).await,
            Err(AppError::Validation(_))
        ));
    }
}
