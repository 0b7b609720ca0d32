use crate::domain::users::User;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Session token claims: the authenticated user's identity embedded in the
/// signed token the dashboard presents on every admin request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub username: String,
    pub role: String,
    pub name: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, expiry_seconds: i64) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.to_string(),
            name: user.name.clone(),
            iat: now,
            exp: now + expiry_seconds,
        }
    }

    pub fn user_id(&self) -> Result<i64> {
        self.sub
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid user ID in claims: {}", e))
    }
}

/// Auth service trait for session token operations
pub trait AuthService: Send + Sync {
    /// Generate a signed session token for a user
    fn generate_token(&self, user: &User) -> Result<String>;

    /// Validate and decode a token
    fn validate_token(&self, token: &str) -> Result<Claims>;
}
