use crate::domain::auth::AuthService;
use crate::domain::login_logs::{LoginLogRepository, NewLoginLog};
use crate::domain::password::PasswordHashingService;
use crate::domain::users::{User, UserRepository};
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

/// Deliberately the same text for an unknown username and a wrong password;
/// the response must not reveal which one it was.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "mreyes", min_length = 1)]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "strongpassword", min_length = 1)]
    pub password: String,
}

/// Where the attempt came from, for the audit trail.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: String,
    pub user_agent: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub username: String,
    #[schema(example = "Administrator")]
    pub role: String,
    pub token: String,
}

pub struct LoginUseCase {
    user_repo: Arc<dyn UserRepository>,
    log_repo: Arc<dyn LoginLogRepository>,
    auth_service: Arc<dyn AuthService>,
    password_service: Arc<dyn PasswordHashingService>,
}

impl LoginUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        log_repo: Arc<dyn LoginLogRepository>,
        auth_service: Arc<dyn AuthService>,
        password_service: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            user_repo,
            log_repo,
            auth_service,
            password_service,
        }
    }

    /// Best-effort audit write. A failing audit store must never change
    /// the outcome of the authentication itself.
    async fn audit(&self, entry: NewLoginLog) {
        if let Err(e) = self.log_repo.append(entry).await {
            tracing::warn!("Failed to write login log entry: {:?}", e);
        }
    }

    fn attempt_log(user: &User, client: &ClientInfo, success: bool) -> NewLoginLog {
        NewLoginLog {
            user_id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role.to_string(),
            ip_address: client.ip_address.clone(),
            user_agent: client.user_agent.clone(),
            success,
        }
    }

    #[tracing::instrument(skip(self, req, client), fields(username = %req.username))]
    pub async fn execute(
        &self,
        req: LoginRequest,
        client: &ClientInfo,
    ) -> Result<LoginResponse, AppError> {
        if req.username.is_empty() || req.password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let Some(user) = self.user_repo.find_by_username(&req.username).await? else {
            self.audit(NewLoginLog::unknown_user(
                &req.username,
                &client.ip_address,
                &client.user_agent,
            ))
            .await;
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        let valid = self
            .password_service
            .verify_password(&req.password, &user.password_hash)?;

        if !valid {
            self.audit(Self::attempt_log(&user, client, false)).await;
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        self.audit(Self::attempt_log(&user, client, true)).await;

        let token = self.auth_service.generate_token(&user)?;

        Ok(LoginResponse {
            id: user.id,
            name: user.name,
            username: user.username,
            role: user.role.to_string(),
            token,
        })
    }
}
