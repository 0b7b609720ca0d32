use crate::domain::login_logs::{LoginLog, LoginLogRepository, NewLoginLog};
use crate::domain::registrations::{
    DuplicateProbe, NewRegistration, Registration, RegistrationRepository, RegistrationStatus,
    UpdateRegistration,
};
use crate::domain::users::{NewUser, UpdateUser, User, UserRepository};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

/// In-memory repositories backing the use-case unit tests. Insertion order
/// stands in for creation order; "newest first" is reverse insertion.

#[derive(Clone, Default)]
pub struct MockRegistrationRepository {
    rows: Arc<Mutex<Vec<Registration>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockRegistrationRepository {
    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

#[async_trait]
impl RegistrationRepository for MockRegistrationRepository {
    async fn create(&self, new: NewRegistration) -> Result<Registration, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let registration = Registration {
            id: self.allocate_id(),
            first_name: new.first_name,
            middle_name: new.middle_name,
            last_name: new.last_name,
            gender: new.gender,
            date_of_birth: new.date_of_birth,
            place_of_birth: new.place_of_birth,
            address: new.address,
            region: new.region,
            province: new.province,
            city: new.city,
            barangay: new.barangay,
            chapter: new.chapter,
            membership: new.membership,
            payment_amount: new.payment_amount,
            status: RegistrationStatus::Pending,
            confirmed_by: None,
            contact_number: new.contact_number,
            email_address: new.email_address,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(registration.clone());
        Ok(registration)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Registration>, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().cloned().collect())
    }

    async fn find_duplicate(
        &self,
        probe: &DuplicateProbe,
    ) -> Result<Option<Registration>, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| {
                (r.first_name == probe.first_name
                    && r.last_name == probe.last_name
                    && r.date_of_birth == probe.date_of_birth)
                    || r.email_address == probe.email_address
                    || r.contact_number == probe.contact_number
            })
            .cloned())
    }

    async fn update(
        &self,
        id: i64,
        update: UpdateRegistration,
    ) -> Result<Option<Registration>, anyhow::Error> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        row.first_name = update.first_name;
        row.middle_name = update.middle_name;
        row.last_name = update.last_name;
        row.gender = update.gender;
        row.date_of_birth = update.date_of_birth;
        row.place_of_birth = update.place_of_birth;
        row.address = update.address;
        row.region = update.region;
        row.province = update.province;
        row.city = update.city;
        row.barangay = update.barangay;
        row.chapter = update.chapter;
        row.membership = update.membership;
        row.payment_amount = update.payment_amount;
        row.status = update.status;
        row.confirmed_by = update.confirmed_by;
        row.contact_number = update.contact_number;
        row.email_address = update.email_address;
        row.updated_at = OffsetDateTime::now_utc();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Clone, Default)]
pub struct MockUserRepository {
    rows: Arc<Mutex<Vec<User>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockUserRepository {
    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, anyhow::Error> {
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: self.allocate_id(),
            username: new_user.username,
            name: new_user.name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, anyhow::Error> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn count_administrators(&self) -> Result<i64, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|u| u.role == crate::domain::users::Role::Administrator)
            .count() as i64)
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<Option<User>, anyhow::Error> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        row.username = update.username;
        row.name = update.name;
        if let Some(hash) = update.password_hash {
            row.password_hash = hash;
        }
        row.role = update.role;
        row.updated_at = OffsetDateTime::now_utc();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Clone, Default)]
pub struct MockLoginLogRepository {
    rows: Arc<Mutex<Vec<LoginLog>>>,
}

impl MockLoginLogRepository {
    pub fn entries(&self) -> Vec<LoginLog> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoginLogRepository for MockLoginLogRepository {
    async fn append(&self, entry: NewLoginLog) -> Result<LoginLog, anyhow::Error> {
        let mut rows = self.rows.lock().unwrap();
        let log = LoginLog {
            id: rows.len() as i64 + 1,
            user_id: entry.user_id,
            username: entry.username,
            name: entry.name,
            role: entry.role,
            ip_address: entry.ip_address,
            user_agent: entry.user_agent,
            success: entry.success,
            login_at: OffsetDateTime::now_utc(),
        };
        rows.push(log.clone());
        Ok(log)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<LoginLog>, anyhow::Error> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().rev().take(limit as usize).cloned().collect())
    }
}
