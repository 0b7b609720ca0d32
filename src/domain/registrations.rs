use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

/// Chapters a registrant can sign up under. Kept as a fixed list rather than
/// a lookup table; the set changes once a year at most.
pub const CHAPTERS: &[&str] = &[
    "Manila",
    "Quezon City",
    "Cebu",
    "Davao",
    "Iloilo",
    "Baguio",
    "Overseas",
];

/// Registrant category. The registration fee is derived from this and is
/// never accepted from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Membership {
    Alumni,
    Member,
}

impl Membership {
    pub fn fee(&self) -> i64 {
        match self {
            Membership::Alumni => 1000,
            Membership::Member => 500,
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Membership::Alumni => write!(f, "Alumni"),
            Membership::Member => write!(f, "Member"),
        }
    }
}

impl FromStr for Membership {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alumni" => Ok(Membership::Alumni),
            "Member" => Ok(Membership::Member),
            other => Err(format!("Unknown membership type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationStatus::Pending => write!(f, "Pending"),
            RegistrationStatus::Approved => write!(f, "Approved"),
            RegistrationStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RegistrationStatus::Pending),
            "Approved" => Ok(RegistrationStatus::Approved),
            "Rejected" => Ok(RegistrationStatus::Rejected),
            other => Err(format!("Unknown registration status: {}", other)),
        }
    }
}

/// One registrant's submission. Dates of birth stay calendar strings; the
/// address fields hold denormalized display names resolved client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
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
    pub membership: Membership,
    pub payment_amount: i64,
    pub status: RegistrationStatus,
    pub confirmed_by: Option<String>,
    pub contact_number: String,
    pub email_address: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewRegistration {
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
    pub membership: Membership,
    pub payment_amount: i64,
    pub contact_number: String,
    pub email_address: String,
}

/// Full-field replacement payload; status and confirmed_by are caller
/// responsibilities here, the store does not infer the acting admin.
#[derive(Debug, Clone)]
pub struct UpdateRegistration {
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
    pub membership: Membership,
    pub payment_amount: i64,
    pub status: RegistrationStatus,
    pub confirmed_by: Option<String>,
    pub contact_number: String,
    pub email_address: String,
}

/// Fields the duplicate check matches against. Any one of the three rules
/// (name + birth date, email, contact number) colliding counts as a
/// duplicate registration.
#[derive(Debug, Clone)]
pub struct DuplicateProbe {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email_address: String,
    pub contact_number: String,
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create(&self, new: NewRegistration) -> Result<Registration, anyhow::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Registration>, anyhow::Error>;
    /// All registrations, newest-created first.
    async fn find_all(&self) -> Result<Vec<Registration>, anyhow::Error>;
    async fn find_duplicate(
        &self,
        probe: &DuplicateProbe,
    ) -> Result<Option<Registration>, anyhow::Error>;
    async fn update(
        &self,
        id: i64,
        update: UpdateRegistration,
    ) -> Result<Option<Registration>, anyhow::Error>;
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_fee_derivation() {
        assert_eq!(Membership::Alumni.fee(), 1000);
        assert_eq!(Membership::Member.fee(), 500);
    }

    #[test]
    fn test_membership_round_trip() {
        assert_eq!("Alumni".parse::<Membership>().unwrap(), Membership::Alumni);
        assert_eq!("Member".parse::<Membership>().unwrap(), Membership::Member);
        assert!("Guest".parse::<Membership>().is_err());
        assert_eq!(Membership::Alumni.to_string(), "Alumni");
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            RegistrationStatus::Pending,
            RegistrationStatus::Approved,
            RegistrationStatus::Rejected,
        ] {
            assert_eq!(
                status.to_string().parse::<RegistrationStatus>().unwrap(),
                status
            );
        }
        assert!("Cancelled".parse::<RegistrationStatus>().is_err());
    }
}
