use crate::application::auth::login::{LoginRequest, LoginResponse, LoginUseCase};
use crate::infrastructure::password::PasswordService;
use crate::infrastructure::repositories::login_logs::PostgresLoginLogRepository;
use crate::infrastructure::repositories::users::PostgresUserRepository;
use crate::infrastructure::state::AppState;
use crate::presentation::extractors::ClientMeta;
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::ApiResponse;
use crate::shared::validation::ValidatedJson;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Login handler
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Missing credentials", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ClientMeta(client): ClientMeta,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = Arc::new(PostgresUserRepository::new(state.pool.clone()));
    let log_repo = Arc::new(PostgresLoginLogRepository::new(state.pool.clone()));

    let use_case = LoginUseCase::new(
        user_repo,
        log_repo,
        state.auth_service.clone(),
        Arc::new(PasswordService::new()),
    );

    let response = use_case.execute(req, &client).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(response))))
}
