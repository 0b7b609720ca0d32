use crate::domain::login_logs::{LoginLog, LoginLogRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

/// The dashboard shows at most the last 100 attempts.
pub const RECENT_LOGIN_LOG_LIMIT: i64 = 100;

pub struct RecentLoginLogsUseCase {
    repo: Arc<dyn LoginLogRepository>,
}

impl RecentLoginLogsUseCase {
    pub fn new(repo: Arc<dyn LoginLogRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<LoginLog>, AppError> {
        Ok(self.repo.recent(RECENT_LOGIN_LOG_LIMIT).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::login_logs::NewLoginLog;
    use crate::infrastructure::repositories::mock::MockLoginLogRepository;

    #[tokio::test]
    async fn test_recent_is_capped_at_one_hundred_newest_first() {
        let repo = Arc::new(MockLoginLogRepository::default());
        for i in 0..150 {
            repo.append(NewLoginLog::unknown_user(&format!("user{}", i), "", ""))
                .await
                .unwrap();
        }

        let logs = RecentLoginLogsUseCase::new(repo).execute().await.unwrap();

        assert_eq!(logs.len(), 100);
        assert_eq!(logs[0].username, "user149");
        assert_eq!(logs[99].username, "user50");
    }
}
