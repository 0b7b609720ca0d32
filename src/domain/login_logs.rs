use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Append-only audit record of an authentication attempt. Rows are never
/// mutated or deleted; user_id is 0 when no user matched the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLog {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
    pub ip_address: String,
    pub user_agent: String,
    pub success: bool,
    #[serde(with = "time::serde::iso8601")]
    pub login_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewLoginLog {
    pub user_id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
    pub ip_address: String,
    pub user_agent: String,
    pub success: bool,
}

impl NewLoginLog {
    /// Attempt against a username that matched no account.
    pub fn unknown_user(username: &str, ip_address: &str, user_agent: &str) -> Self {
        Self {
            user_id: 0,
            username: username.to_string(),
            name: String::new(),
            role: "Unknown".to_string(),
            ip_address: ip_address.to_string(),
            user_agent: user_agent.to_string(),
            success: false,
        }
    }
}

#[async_trait]
pub trait LoginLogRepository: Send + Sync {
    async fn append(&self, entry: NewLoginLog) -> Result<LoginLog, anyhow::Error>;
    /// Most recent entries, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<LoginLog>, anyhow::Error>;
}
