use crate::application::dashboard::stats::{DashboardStats, DashboardStatsUseCase};
use crate::infrastructure::repositories::registrations::PostgresRegistrationRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Dashboard statistics over the full registration list
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardStats>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "dashboard"
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresRegistrationRepository::new(state.pool.clone()));
    let use_case = DashboardStatsUseCase::new(repo);

    let stats = use_case.execute().await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(stats))))
}
