use crate::domain::login_logs::{LoginLog, LoginLogRepository, NewLoginLog};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::login_logs::LoginLogDbModel;
use async_trait::async_trait;

#[derive(Clone)]
pub struct PostgresLoginLogRepository {
    pool: DbPool,
}

impl PostgresLoginLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginLogRepository for PostgresLoginLogRepository {
    async fn append(&self, entry: NewLoginLog) -> Result<LoginLog, anyhow::Error> {
        let row = sqlx::query_as::<_, LoginLogDbModel>(
            r#"
            INSERT INTO login_logs
                (user_id, username, name, role, ip_address, user_agent, success)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, username, name, role, ip_address, user_agent,
                      success, login_at
            "#,
        )
        .bind(entry.user_id)
        .bind(entry.username)
        .bind(entry.name)
        .bind(entry.role)
        .bind(entry.ip_address)
        .bind(entry.user_agent)
        .bind(entry.success)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<LoginLog>, anyhow::Error> {
        let rows = sqlx::query_as::<_, LoginLogDbModel>(
            r#"
            SELECT id, user_id, username, name, role, ip_address, user_agent,
                   success, login_at
            FROM login_logs
            ORDER BY login_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LoginLog::from).collect())
    }
}
