use crate::domain::registrations::{
    CHAPTERS, DuplicateProbe, Membership, NewRegistration, Registration, RegistrationRepository,
};
use crate::shared::error::AppError;
use crate::shared::validation::{sanitize_text, validate_email, validate_phone_number};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

pub const DUPLICATE_REGISTRATION: &str = "Duplicate registration";

/// Raw intake payload. Every field defaults to the empty string so
/// sanitization is total; membership arrives as free text and is parsed
/// during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRegistrationRequest {
    #[schema(example = "Ana")]
    pub first_name: String,
    pub middle_name: String,
    #[schema(example = "Cruz")]
    pub last_name: String,
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "1990-01-01")]
    pub date_of_birth: String,
    #[schema(example = "Manila")]
    pub place_of_birth: String,
    pub address: String,
    pub region: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
    #[schema(example = "Manila")]
    pub chapter: String,
    #[schema(example = "Member")]
    pub membership: String,
    #[schema(example = "09171234567")]
    pub contact_number: String,
    #[schema(example = "ana@x.com")]
    pub email_address: String,
}

/// Sanitized copy of the intake payload, ready for validation.
#[derive(Debug, Clone)]
pub struct CleanRegistration {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub address: String,
    pub region: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
    pub chapter: String,
    pub membership: String,
    pub contact_number: String,
    pub email_address: String,
}

impl CreateRegistrationRequest {
    pub fn sanitize(&self) -> CleanRegistration {
        CleanRegistration {
            first_name: sanitize_text(&self.first_name),
            middle_name: sanitize_text(&self.middle_name),
            last_name: sanitize_text(&self.last_name),
            gender: sanitize_text(&self.gender),
            date_of_birth: sanitize_text(&self.date_of_birth),
            place_of_birth: sanitize_text(&self.place_of_birth),
            address: sanitize_text(&self.address),
            region: sanitize_text(&self.region),
            province: sanitize_text(&self.province),
            city: sanitize_text(&self.city),
            barangay: sanitize_text(&self.barangay),
            chapter: sanitize_text(&self.chapter),
            membership: sanitize_text(&self.membership),
            contact_number: sanitize_text(&self.contact_number),
            email_address: sanitize_text(&self.email_address),
        }
    }
}

impl CleanRegistration {
    /// Field-level checks; returns the parsed membership on success, from
    /// which the payment amount is derived.
    pub fn validate(&self) -> Result<Membership, AppError> {
        if self.first_name.is_empty() {
            return Err(AppError::Validation("First name is required".to_string()));
        }
        if self.last_name.is_empty() {
            return Err(AppError::Validation("Last name is required".to_string()));
        }
        if self.email_address.is_empty() {
            return Err(AppError::Validation("Email address is required".to_string()));
        }
        if self.contact_number.is_empty() {
            return Err(AppError::Validation(
                "Contact number is required".to_string(),
            ));
        }
        if !validate_email(&self.email_address) {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }
        if !validate_phone_number(&self.contact_number) {
            return Err(AppError::Validation("Invalid contact number".to_string()));
        }
        if !self.chapter.is_empty() && !CHAPTERS.contains(&self.chapter.as_str()) {
            return Err(AppError::Validation(format!(
                "Unknown chapter: {}",
                self.chapter
            )));
        }

        self.membership.parse().map_err(AppError::Validation)
    }

    pub fn duplicate_probe(&self) -> DuplicateProbe {
        DuplicateProbe {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            email_address: self.email_address.clone(),
            contact_number: self.contact_number.clone(),
        }
    }
}

pub struct CreateRegistrationUseCase {
    repo: Arc<dyn RegistrationRepository>,
}

impl CreateRegistrationUseCase {
    pub fn new(repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, req: CreateRegistrationRequest) -> Result<Registration, AppError> {
        let clean = req.sanitize();
        let membership = clean.validate()?;

        // Check-then-insert: concurrent submissions racing on the same
        // identity can both pass this lookup. Accepted gap; the store's own
        // integrity enforcement is the only backstop.
        if self.repo.find_duplicate(&clean.duplicate_probe()).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_REGISTRATION.to_string()));
        }

        let payment_amount = membership.fee();
        let new = NewRegistration {
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
            payment_amount,
            contact_number: clean.contact_number,
            email_address: clean.email_address,
        };

        Ok(self.repo.create(new).await?)
    }
}
