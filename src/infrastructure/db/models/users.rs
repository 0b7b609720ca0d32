use crate::domain::users::User;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct UserDbModel {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<UserDbModel> for User {
    type Error = anyhow::Error;

    fn try_from(model: UserDbModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            username: model.username,
            name: model.name,
            password_hash: model.password_hash,
            role: model.role.parse().map_err(anyhow::Error::msg)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
