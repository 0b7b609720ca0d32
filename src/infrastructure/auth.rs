use crate::domain::auth::{AuthService, Claims};
use crate::domain::users::User;
use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Session tokens are valid for 24 hours.
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

/// JWT session token service using HS256 with a shared signing secret
pub struct JwtAuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_secs: i64,
}

impl JwtAuthService {
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry_secs,
        }
    }

    pub fn from_secret(secret: &str) -> Self {
        Self::new(secret, DEFAULT_TOKEN_EXPIRY_SECS)
    }
}

impl AuthService for JwtAuthService {
    fn generate_token(&self, user: &User) -> Result<String> {
        let claims = Claims::for_user(user, self.token_expiry_secs);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to generate session token: {}", e))
    }

    fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::users::Role;
    use time::OffsetDateTime;

    fn sample_user() -> User {
        User {
            id: 42,
            username: "admin".to_string(),
            name: "Site Admin".to_string(),
            password_hash: "irrelevant".to_string(),
            role: Role::Administrator,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let service = JwtAuthService::from_secret("test-secret");
        let user = sample_user();

        let token = service.generate_token(&user).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "Administrator");
        assert_eq!(claims.name, "Site Admin");
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_EXPIRY_SECS);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service = JwtAuthService::from_secret("test-secret");
        let other = JwtAuthService::from_secret("different-secret");
        let user = sample_user();

        let token = other.generate_token(&user).unwrap();
        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // jsonwebtoken applies a 60s default leeway, so go well past it.
        let service = JwtAuthService::new("test-secret", -120);
        let user = sample_user();

        let token = service.generate_token(&user).unwrap();
        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtAuthService::from_secret("test-secret");
        assert!(service.validate_token("not.a.token").is_err());
    }
}
