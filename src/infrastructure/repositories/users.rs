use crate::domain::users::{NewUser, UpdateUser, User, UserRepository};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::users::UserDbModel;
use async_trait::async_trait;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: DbPool,
}

impl PostgresUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, anyhow::Error> {
        let row = sqlx::query_as::<_, UserDbModel>(
            r#"
            INSERT INTO users (username, name, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, name, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(new_user.username)
        .bind(new_user.name)
        .bind(new_user.password_hash)
        .bind(new_user.role.to_string())
        .fetch_one(&self.pool)
        .await?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        let row = sqlx::query_as::<_, UserDbModel>(
            r#"
            SELECT id, username, name, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, anyhow::Error> {
        let row = sqlx::query_as::<_, UserDbModel>(
            r#"
            SELECT id, username, name, password_hash, role, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, anyhow::Error> {
        let rows = sqlx::query_as::<_, UserDbModel>(
            r#"
            SELECT id, username, name, password_hash, role, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn count_administrators(&self) -> Result<i64, anyhow::Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'Administrator'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<Option<User>, anyhow::Error> {
        // COALESCE keeps the stored hash when no new password was supplied.
        let row = sqlx::query_as::<_, UserDbModel>(
            r#"
            UPDATE users SET
                username = $2,
                name = $3,
                password_hash = COALESCE($4, password_hash),
                role = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, name, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.username)
        .bind(update.name)
        .bind(update.password_hash)
        .bind(update.role.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
