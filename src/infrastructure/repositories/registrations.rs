use crate::domain::registrations::{
    DuplicateProbe, NewRegistration, Registration, RegistrationRepository, UpdateRegistration,
};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::registrations::RegistrationDbModel;
use async_trait::async_trait;

const REGISTRATION_COLUMNS: &str = "id, first_name, middle_name, last_name, gender, \
    date_of_birth, place_of_birth, address, region, province, city, barangay, chapter, \
    membership, payment_amount, status, confirmed_by, contact_number, email_address, \
    created_at, updated_at";

#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    pool: DbPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn create(&self, new: NewRegistration) -> Result<Registration, anyhow::Error> {
        let query = format!(
            r#"
            INSERT INTO registrations
                (first_name, middle_name, last_name, gender, date_of_birth, place_of_birth,
                 address, region, province, city, barangay, chapter, membership,
                 payment_amount, status, contact_number, email_address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    'Pending', $15, $16)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RegistrationDbModel>(&query)
            .bind(new.first_name)
            .bind(new.middle_name)
            .bind(new.last_name)
            .bind(new.gender)
            .bind(new.date_of_birth)
            .bind(new.place_of_birth)
            .bind(new.address)
            .bind(new.region)
            .bind(new.province)
            .bind(new.city)
            .bind(new.barangay)
            .bind(new.chapter)
            .bind(new.membership.to_string())
            .bind(new.payment_amount)
            .bind(new.contact_number)
            .bind(new.email_address)
            .fetch_one(&self.pool)
            .await?;

        Registration::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, anyhow::Error> {
        let query = format!("SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE id = $1");

        let row = sqlx::query_as::<_, RegistrationDbModel>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Registration::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Registration>, anyhow::Error> {
        let query = format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations ORDER BY created_at DESC, id DESC"
        );

        let rows = sqlx::query_as::<_, RegistrationDbModel>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Registration::try_from).collect()
    }

    async fn find_duplicate(
        &self,
        probe: &DuplicateProbe,
    ) -> Result<Option<Registration>, anyhow::Error> {
        // The three uniqueness rules are deliberately merged into a single
        // lookup; callers report one "duplicate registration" conflict
        // without disclosing which field collided.
        let query = format!(
            r#"
            SELECT {REGISTRATION_COLUMNS} FROM registrations
            WHERE (first_name = $1 AND last_name = $2 AND date_of_birth = $3)
               OR email_address = $4
               OR contact_number = $5
            LIMIT 1
            "#
        );

        let row = sqlx::query_as::<_, RegistrationDbModel>(&query)
            .bind(&probe.first_name)
            .bind(&probe.last_name)
            .bind(&probe.date_of_birth)
            .bind(&probe.email_address)
            .bind(&probe.contact_number)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Registration::try_from).transpose()
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateRegistration,
    ) -> Result<Option<Registration>, anyhow::Error> {
        let query = format!(
            r#"
            UPDATE registrations SET
                first_name = $2, middle_name = $3, last_name = $4, gender = $5,
                date_of_birth = $6, place_of_birth = $7, address = $8, region = $9,
                province = $10, city = $11, barangay = $12, chapter = $13,
                membership = $14, payment_amount = $15, status = $16,
                confirmed_by = $17, contact_number = $18, email_address = $19,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RegistrationDbModel>(&query)
            .bind(id)
            .bind(update.first_name)
            .bind(update.middle_name)
            .bind(update.last_name)
            .bind(update.gender)
            .bind(update.date_of_birth)
            .bind(update.place_of_birth)
            .bind(update.address)
            .bind(update.region)
            .bind(update.province)
            .bind(update.city)
            .bind(update.barangay)
            .bind(update.chapter)
            .bind(update.membership.to_string())
            .bind(update.payment_amount)
            .bind(update.status.to_string())
            .bind(update.confirmed_by)
            .bind(update.contact_number)
            .bind(update.email_address)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Registration::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
