use crate::application::auth::login::{LoginRequest, LoginResponse};
use crate::application::dashboard::stats::{
    BreakdownEntry, DashboardStats, RevenueEntry, TrendPoint,
};
use crate::application::registrations::create::CreateRegistrationRequest;
use crate::application::registrations::update::UpdateRegistrationRequest;
use crate::application::users::create::CreateUserRequest;
use crate::application::users::update::UpdateUserRequest;
use crate::domain::address::AddressOption;
use crate::domain::users::Role;
use crate::presentation::handlers::login_logs::LoginLogResource;
use crate::presentation::handlers::registrations::RegistrationResource;
use crate::presentation::handlers::users::UserResource;
use crate::shared::error::{ErrorDetail, ErrorResponse};
use crate::shared::response::ApiResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tipon Registration API",
        version = "0.1.0",
        description = "Anniversary membership registration intake and admin dashboard API"
    ),
    paths(
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::registrations::create_registration,
        crate::presentation::handlers::registrations::list_registrations,
        crate::presentation::handlers::registrations::get_registration,
        crate::presentation::handlers::registrations::update_registration,
        crate::presentation::handlers::registrations::delete_registration,
        crate::presentation::handlers::users::create_user,
        crate::presentation::handlers::users::list_users,
        crate::presentation::handlers::users::update_user,
        crate::presentation::handlers::users::delete_user,
        crate::presentation::handlers::login_logs::list_login_logs,
        crate::presentation::handlers::dashboard::dashboard_stats,
        crate::presentation::handlers::address::list_regions,
        crate::presentation::handlers::address::list_provinces,
        crate::presentation::handlers::address::list_cities,
        crate::presentation::handlers::address::list_barangays,
    ),
    components(
        schemas(
            // Request DTOs
            CreateRegistrationRequest,
            UpdateRegistrationRequest,
            CreateUserRequest,
            UpdateUserRequest,
            LoginRequest,
            Role,

            // Resources
            RegistrationResource,
            UserResource,
            LoginLogResource,
            LoginResponse,
            AddressOption,
            DashboardStats,
            TrendPoint,
            BreakdownEntry,
            RevenueEntry,

            // Envelopes
            ApiResponse<RegistrationResource>,
            ApiResponse<Vec<RegistrationResource>>,
            ApiResponse<UserResource>,
            ApiResponse<Vec<UserResource>>,
            ApiResponse<LoginResponse>,
            ApiResponse<Vec<LoginLogResource>>,
            ApiResponse<DashboardStats>,
            ApiResponse<Vec<AddressOption>>,
            ApiResponse<serde_json::Value>,

            // Errors
            ErrorResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "auth", description = "Authentication"),
        (name = "registrations", description = "Registration intake and management"),
        (name = "users", description = "Dashboard account management"),
        (name = "login-logs", description = "Authentication audit trail"),
        (name = "dashboard", description = "Aggregated statistics"),
        (name = "address", description = "Cascading address lookups")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
