use crate::domain::address::{AddressDirectory, AddressOption};
use async_trait::async_trait;

/// (code, name) for top-level regions; child tables carry the parent code.
/// A bundled slice of PSGC data backs the cascade lookups; swapping in a
/// live PSGC client only means another impl of `AddressDirectory`.
const REGIONS: &[(&str, &str)] = &[
    ("13", "National Capital Region"),
    ("04", "CALABARZON"),
    ("07", "Central Visayas"),
    ("11", "Davao Region"),
];

const PROVINCES: &[(&str, &str, &str)] = &[
    ("1339", "Metro Manila District 1", "13"),
    ("1374", "Metro Manila District 4", "13"),
    ("0434", "Laguna", "04"),
    ("0458", "Rizal", "04"),
    ("0722", "Cebu", "07"),
    ("0712", "Bohol", "07"),
    ("1124", "Davao del Sur", "11"),
];

const CITIES: &[(&str, &str, &str)] = &[
    ("133900", "City of Manila", "1339"),
    ("137404", "City of Makati", "1374"),
    ("043404", "City of Calamba", "0434"),
    ("045802", "City of Antipolo", "0458"),
    ("072217", "City of Cebu", "0722"),
    ("071242", "City of Tagbilaran", "0712"),
    ("112402", "City of Davao", "1124"),
];

const BARANGAYS: &[(&str, &str, &str)] = &[
    ("13390001", "Barangay 1", "133900"),
    ("13390002", "Barangay 2", "133900"),
    ("13740401", "Poblacion", "137404"),
    ("04340401", "Banlic", "043404"),
    ("04580201", "San Roque", "045802"),
    ("07221701", "Lahug", "072217"),
    ("07124201", "Cogon", "071242"),
    ("11240201", "Buhangin", "112402"),
];

fn options_for(table: &[(&str, &str, &str)], parent_code: &str) -> Vec<AddressOption> {
    table
        .iter()
        .filter(|(_, _, parent)| *parent == parent_code)
        .map(|(code, name, _)| AddressOption {
            code: (*code).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

/// In-memory `AddressDirectory` over the bundled geographic-code tables.
#[derive(Clone, Default)]
pub struct StaticAddressDirectory;

impl StaticAddressDirectory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AddressDirectory for StaticAddressDirectory {
    async fn regions(&self) -> Result<Vec<AddressOption>, anyhow::Error> {
        Ok(REGIONS
            .iter()
            .map(|(code, name)| AddressOption {
                code: (*code).to_string(),
                name: (*name).to_string(),
            })
            .collect())
    }

    async fn provinces(&self, region_code: &str) -> Result<Vec<AddressOption>, anyhow::Error> {
        Ok(options_for(PROVINCES, region_code))
    }

    async fn cities(&self, province_code: &str) -> Result<Vec<AddressOption>, anyhow::Error> {
        Ok(options_for(CITIES, province_code))
    }

    async fn barangays(&self, city_code: &str) -> Result<Vec<AddressOption>, anyhow::Error> {
        Ok(options_for(BARANGAYS, city_code))
    }
}
