use crate::domain::address::AddressDirectory;
use crate::infrastructure::auth::JwtAuthService;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub auth_service: Arc<JwtAuthService>,
    pub address_directory: Arc<dyn AddressDirectory>,
}

impl AppState {
    pub fn new(
        pool: DbPool,
        auth_service: Arc<JwtAuthService>,
        address_directory: Arc<dyn AddressDirectory>,
    ) -> Self {
        Self {
            pool,
            auth_service,
            address_directory,
        }
    }
}
