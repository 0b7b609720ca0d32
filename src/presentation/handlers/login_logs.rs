use crate::application::login_logs::list::RecentLoginLogsUseCase;
use crate::domain::login_logs::LoginLog;
use crate::infrastructure::repositories::login_logs::PostgresLoginLogRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::AuthUser;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginLogResource {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
    pub ip_address: String,
    pub user_agent: String,
    pub success: bool,
    #[serde(with = "time::serde::iso8601")]
    #[schema(value_type = String)]
    pub login_at: time::OffsetDateTime,
}

impl From<LoginLog> for LoginLogResource {
    fn from(log: LoginLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            username: log.username,
            name: log.name,
            role: log.role,
            ip_address: log.ip_address,
            user_agent: log.user_agent,
            success: log.success,
            login_at: log.login_at,
        }
    }
}

/// Most recent 100 login attempts, newest first
#[utoipa::path(
    get,
    path = "/api/v1/login-logs",
    responses(
        (status = 200, description = "Recent login attempts", body = ApiResponse<Vec<LoginLogResource>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "login-logs"
)]
pub async fn list_login_logs(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let repo = Arc::new(PostgresLoginLogRepository::new(state.pool.clone()));
    let use_case = RecentLoginLogsUseCase::new(repo);

    let logs = use_case.execute().await?;
    let resources: Vec<LoginLogResource> = logs.into_iter().map(LoginLogResource::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(resources))))
}
