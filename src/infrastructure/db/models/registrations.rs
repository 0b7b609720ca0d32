use crate::domain::registrations::Registration;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Raw registration row; membership and status are TEXT columns parsed into
/// domain enums on the way out.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationDbModel {
    pub id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
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
    pub payment_amount: i64,
    pub status: String,
    pub confirmed_by: Option<String>,
    pub contact_number: String,
    pub email_address: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<RegistrationDbModel> for Registration {
    type Error = anyhow::Error;

    fn try_from(model: RegistrationDbModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            gender: model.gender,
            date_of_birth: model.date_of_birth,
            place_of_birth: model.place_of_birth,
            address: model.address,
            region: model.region,
            province: model.province,
            city: model.city,
            barangay: model.barangay,
            chapter: model.chapter,
            membership: model.membership.parse().map_err(anyhow::Error::msg)?,
            payment_amount: model.payment_amount,
            status: model.status.parse().map_err(anyhow::Error::msg)?,
            confirmed_by: model.confirmed_by,
            contact_number: model.contact_number,
            email_address: model.email_address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
