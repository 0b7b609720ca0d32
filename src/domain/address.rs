use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A code/name pair from the geographic-code service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AddressOption {
    #[schema(example = "1300000000")]
    pub code: String,
    #[schema(example = "National Capital Region")]
    pub name: String,
}

/// The four dependent address levels a registrant picks through, keyed by
/// hierarchical codes. Selecting a level clears every level below it, so a
/// stale city can never survive a region change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSelection {
    pub region: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub barangay: Option<String>,
}

impl AddressSelection {
    pub fn select_region(&mut self, code: impl Into<String>) {
        self.region = Some(code.into());
        self.province = None;
        self.city = None;
        self.barangay = None;
    }

    pub fn select_province(&mut self, code: impl Into<String>) {
        self.province = Some(code.into());
        self.city = None;
        self.barangay = None;
    }

    pub fn select_city(&mut self, code: impl Into<String>) {
        self.city = Some(code.into());
        self.barangay = None;
    }

    pub fn select_barangay(&mut self, code: impl Into<String>) {
        self.barangay = Some(code.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lookup interface over the external geographic-code service. Only the
/// four dependent lookups are part of the contract; how the backing data is
/// maintained is out of scope.
#[async_trait]
pub trait AddressDirectory: Send + Sync {
    async fn regions(&self) -> Result<Vec<AddressOption>, anyhow::Error>;
    async fn provinces(&self, region_code: &str) -> Result<Vec<AddressOption>, anyhow::Error>;
    async fn cities(&self, province_code: &str) -> Result<Vec<AddressOption>, anyhow::Error>;
    async fn barangays(&self, city_code: &str) -> Result<Vec<AddressOption>, anyhow::Error>;
}
