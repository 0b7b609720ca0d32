use crate::domain::address::AddressOption;
use crate::infrastructure::state::AppState;
use crate::shared::error::AppError;
use crate::shared::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List regions
#[utoipa::path(
    get,
    path = "/api/v1/address/regions",
    responses(
        (status = 200, description = "Regions", body = ApiResponse<Vec<AddressOption>>)
    ),
    tag = "address"
)]
pub async fn list_regions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let regions = state.address_directory.regions().await?;
    Ok((StatusCode::OK, Json(ApiResponse::new(regions))))
}

/// List provinces within a region
#[utoipa::path(
    get,
    path = "/api/v1/address/provinces/{region}",
    params(("region" = String, Path, description = "Region code")),
    responses(
        (status = 200, description = "Provinces", body = ApiResponse<Vec<AddressOption>>)
    ),
    tag = "address"
)]
pub async fn list_provinces(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provinces = state.address_directory.provinces(&region).await?;
    Ok((StatusCode::OK, Json(ApiResponse::new(provinces))))
}

/// List cities within a province
#[utoipa::path(
    get,
    path = "/api/v1/address/cities/{province}",
    params(("province" = String, Path, description = "Province code")),
    responses(
        (status = 200, description = "Cities", body = ApiResponse<Vec<AddressOption>>)
    ),
    tag = "address"
)]
pub async fn list_cities(
    State(state): State<AppState>,
    Path(province): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cities = state.address_directory.cities(&province).await?;
    Ok((StatusCode::OK, Json(ApiResponse::new(cities))))
}

/// List barangays within a city
#[utoipa::path(
    get,
    path = "/api/v1/address/barangays/{city}",
    params(("city" = String, Path, description = "City code")),
    responses(
        (status = 200, description = "Barangays", body = ApiResponse<Vec<AddressOption>>)
    ),
    tag = "address"
)]
pub async fn list_barangays(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let barangays = state.address_directory.barangays(&city).await?;
    Ok((StatusCode::OK, Json(ApiResponse::new(barangays))))
}
