use crate::domain::login_logs::LoginLog;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct LoginLogDbModel {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
    pub ip_address: String,
    pub user_agent: String,
    pub success: bool,
    pub login_at: OffsetDateTime,
}

impl From<LoginLogDbModel> for LoginLog {
    fn from(model: LoginLogDbModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            username: model.username,
            name: model.name,
            role: model.role,
            ip_address: model.ip_address,
            user_agent: model.user_agent,
            success: model.success,
            login_at: model.login_at,
        }
    }
}
