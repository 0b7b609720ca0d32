use crate::domain::password::PasswordHashingService;
use crate::domain::users::{Role, UpdateUser, User, UserRepository};
use crate::shared::error::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "mreyes", min_length = 1)]
    pub username: String,
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Reyes", min_length = 1)]
    pub name: String,
    /// Omit to keep the current password.
    #[schema(example = "newstrongpassword")]
    pub password: Option<String>,
    pub role: Role,
}

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHashingService>,
}

impl UpdateUserUseCase {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHashingService>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
        }
    }

    #[tracing::instrument(skip(self, req), fields(user_id = id))]
    pub async fn execute(&self, id: i64, req: UpdateUserRequest) -> Result<User, AppError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        // Uniqueness re-check only when the username is actually changing.
        if req.username != existing.username
            && self.repo.find_by_username(&req.username).await?.is_some()
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        // Same guard as delete: demoting the sole Administrator would leave
        // nobody able to administer. Checked before any write.
        if existing.role == Role::Administrator
            && req.role != Role::Administrator
            && self.repo.count_administrators().await? <= 1
        {
            return Err(AppError::LastAdministrator);
        }

        let password_hash = match req.password {
            Some(password) => {
                if password.len() < 8 {
                    return Err(AppError::Validation(
                        "Password must be at least 8 characters".to_string(),
                    ));
                }
                Some(self.password_hasher.hash_password(&password)?)
            }
            None => None,
        };

        let update = UpdateUser {
            username: req.username,
            name: req.name,
            password_hash,
            role: req.role,
        };

        self.repo
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::users::NewUser;
    use crate::infrastructure::password::PasswordService;
    use crate::infrastructure::repositories::mock::MockUserRepository;

    async fn seed(repo: &MockUserRepository, username: &str) -> User {
        repo.create(NewUser {
            username: username.to_string(),
            name: "Seeded".to_string(),
            password_hash: "$argon2$original".to_string(),
            role: Role::Member,
        })
        .await
        .unwrap()
    }

    fn use_case(repo: Arc<MockUserRepository>) -> UpdateUserUseCase {
        UpdateUserUseCase::new(repo, Arc::new(PasswordService::new()))
    }

    #[tokio::test]
    async fn test_update_without_password_keeps_hash() {
        let repo = Arc::new(MockUserRepository::default());
        let user = seed(&repo, "mreyes").await;

        let updated = use_case(repo)
            .execute(
                user.id,
                UpdateUserRequest {
                    username: "mreyes".to_string(),
                    name: "Maria R. Reyes".to_string(),
                    password: None,
                    role: Role::Administrator,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Maria R. Reyes");
        assert_eq!(updated.role, Role::Administrator);
        assert_eq!(updated.password_hash, "$argon2$original");
    }

    #[tokio::test]
    async fn test_update_with_password_rehashes() {
        let repo = Arc::new(MockUserRepository::default());
        let user = seed(&repo, "mreyes").await;

        let updated = use_case(repo)
            .execute(
                user.id,
                UpdateUserRequest {
                    username: "mreyes".to_string(),
                    name: "Maria Reyes".to_string(),
                    password: Some("newstrongpassword".to_string()),
                    role: Role::Member,
                },
            )
            .await
            .unwrap();

        assert_ne!(updated.password_hash, "$argon2$original");
        assert!(updated.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_short_replacement_password_is_rejected() {
        let repo = Arc::new(MockUserRepository::default());
        let user = seed(&repo, "mreyes").await;

        let result = use_case(repo)
            .execute(
                user.id,
                UpdateUserRequest {
                    username: "mreyes".to_string(),
                    name: "Maria Reyes".to_string(),
                    password: Some("short".to_string()),
                    role: Role::Member,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_renaming_onto_taken_username_conflicts() {
        let repo = Arc::new(MockUserRepository::default());
        seed(&repo, "taken").await;
        let user = seed(&repo, "mreyes").await;

        let result = use_case(repo)
            .execute(
                user.id,
                UpdateUserRequest {
                    username: "taken".to_string(),
                    name: "Maria Reyes".to_string(),
                    password: None,
                    role: Role::Member,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_keeping_own_username_is_not_a_conflict() {
        let repo = Arc::new(MockUserRepository::default());
        let user = seed(&repo, "mreyes").await;

        let updated = use_case(repo)
            .execute(
                user.id,
                UpdateUserRequest {
                    username: "mreyes".to_string(),
                    name: "Renamed".to_string(),
                    password: None,
                    role: Role::Member,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let repo = Arc::new(MockUserRepository::default());
        let result = use_case(repo)
            .execute(
                404,
                UpdateUserRequest {
                    username: "ghost".to_string(),
                    name: "Ghost".to_string(),
                    password: None,
                    role: Role::Member,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    async fn seed_admin(repo: &MockUserRepository, username: &str) -> User {
        repo.create(NewUser {
            username: username.to_string(),
            name: "Seeded".to_string(),
            password_hash: "$argon2$original".to_string(),
            role: Role::Administrator,
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_downgrading_sole_administrator_is_rejected() {
        let repo = Arc::new(MockUserRepository::default());
        let admin = seed_admin(&repo, "admin").await;
        seed(&repo, "member").await;

        let result = use_case(repo.clone())
            .execute(
                admin.id,
                UpdateUserRequest {
                    username: "admin".to_string(),
                    name: "Seeded".to_string(),
                    password: None,
                    role: Role::Member,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::LastAdministrator)));
        // No mutation happened; the sole admin keeps the role.
        assert_eq!(repo.count_administrators().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_downgrading_administrator_when_another_remains() {
        let repo = Arc::new(MockUserRepository::default());
        let first = seed_admin(&repo, "admin1").await;
        seed_admin(&repo, "admin2").await;

        let updated = use_case(repo.clone())
            .execute(
                first.id,
                UpdateUserRequest {
                    username: "admin1".to_string(),
                    name: "Seeded".to_string(),
                    password: None,
                    role: Role::Member,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.role, Role::Member);
        assert_eq!(repo.count_administrators().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sole_administrator_can_be_updated_keeping_the_role() {
        let repo = Arc::new(MockUserRepository::default());
        let admin = seed_admin(&repo, "admin").await;

        let updated = use_case(repo)
            .execute(
                admin.id,
                UpdateUserRequest {
                    username: "admin".to_string(),
                    name: "Renamed Admin".to_string(),
                    password: None,
                    role: Role::Administrator,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed Admin");
        assert_eq!(updated.role, Role::Administrator);
    }
}
