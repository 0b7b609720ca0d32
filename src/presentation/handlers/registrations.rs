use crate::application::registrations::create::{
    CreateRegistrationRequest, CreateRegistrationUseCase,
};
use crate::application::registrations::delete::DeleteRegistrationUseCase;
use crate::application::registrations::get::GetRegistrationUseCase;
use crate::application::registrations::list::ListRegistrationsUseCase;
use crate::application::registrations::update::{
    UpdateRegistrationRequest, UpdateRegistrationUseCase,
};
use crate::domain::registrations::Registration;
use crate::infrastructure::repositories::registrations::PostgresRegistrationRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResource {
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
    #[schema(example = "Member")]
    pub membership: String,
    pub payment_amount: i64,
    #[schema(example = "Pending")]
    pub status: String,
    pub confirmed_by: Option<String>,
    pub contact_number: String,
    pub email_address: String,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Registration> for RegistrationResource {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            first_name: registration.first_name,
            middle_name: registration.middle_name,
            last_name: registration.last_name,
            gender: registration.gender,
            date_of_birth: registration.date_of_birth,
            place_of_birth: registration.place_of_birth,
            address: registration.address,
            region: registration.region,
            province: registration.province,
            city: registration.city,
            barangay: registration.barangay,
            chapter: registration.chapter,
            membership: registration.membership.to_string(),
            payment_amount: registration.payment_amount,
            status: registration.status.to_string(),
            confirmed_by: registration.confirmed_by,
            contact_number: registration.contact_number,
            email_address: registration.email_address,
            created_at: registration.created_at,
            updated_at: registration.updated_at,
        }
    }
}

/// Submit a registration
#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration submitted", body = ApiResponse<RegistrationResource>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Duplicate registration", body = ErrorResponse)
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresRegistrationRepository::new(state.pool.clone()));
    let use_case = CreateRegistrationUseCase::new(repo);

    let registration = use_case.execute(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(RegistrationResource::from(registration))),
    ))
}

/// List all registrations, newest first
#[utoipa::path(
    get,
    path = "/api/v1/registrations",
    responses(
        (status = 200, description = "List of registrations", body = ApiResponse<Vec<RegistrationResource>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresRegistrationRepository::new(state.pool.clone()));
    let use_case = ListRegistrationsUseCase::new(repo);

    let registrations = use_case.execute().await?;
    let resources: Vec<RegistrationResource> = registrations
        .into_iter()
        .map(RegistrationResource::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(resources))))
}

/// Get a registration by ID
#[utoipa::path(
    get,
    path = "/api/v1/registrations/{id}",
    params(("id" = i64, Path, description = "Registration ID")),
    responses(
        (status = 200, description = "Registration found", body = ApiResponse<RegistrationResource>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Registration not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "registrations"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresRegistrationRepository::new(state.pool.clone()));
    let use_case = GetRegistrationUseCase::new(repo);

    let registration = use_case.execute(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(RegistrationResource::from(registration))),
    ))
}

/// Replace a registration
#[utoipa::path(
    put,
    path = "/api/v1/registrations/{id}",
    params(("id" = i64, Path, description = "Registration ID")),
    request_body = UpdateRegistrationRequest,
    responses(
        (status = 200, description = "Registration updated", body = ApiResponse<RegistrationResource>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Registration not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "registrations"
)]
pub async fn update_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    _auth: AuthUser,
    Json(req): Json<UpdateRegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresRegistrationRepository::new(state.pool.clone()));
    let use_case = UpdateRegistrationUseCase::new(repo);

    let registration = use_case.execute(id, req).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(RegistrationResource::from(registration))),
    ))
}

/// Delete a registration
#[utoipa::path(
    delete,
    path = "/api/v1/registrations/{id}",
    params(("id" = i64, Path, description = "Registration ID")),
    responses(
        (status = 200, description = "Registration deleted", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Registration not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "registrations"
)]
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresRegistrationRepository::new(state.pool.clone()));
    let use_case = DeleteRegistrationUseCase::new(repo);

    use_case.execute(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(json!(null)).with_meta(json!({ "deleted": true }))),
    ))
}
