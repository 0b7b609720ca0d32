use crate::shared::error::AppError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

/// Trims surrounding whitespace and strips angle brackets from free-text
/// input. This intentionally does not escape quotes or HTML entities; it is
/// the minimal pass applied to every registration field at intake.
pub fn sanitize_text(value: &str) -> String {
    let stripped: String = value.chars().filter(|c| *c != '<' && *c != '>').collect();
    stripped.trim().to_string()
}

/// Accepts `local@domain.tld` shapes: exactly one `@`, no whitespace, and a
/// dot inside the domain with characters on both sides.
pub fn validate_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Accepts Philippine mobile (`(+63|0)?9` + 9 digits), Philippine landline
/// (`(+63|0)?[2-8]` + 7 digits), or generic international (`+` then 7-15
/// digits not starting with 0). All other characters are stripped first, so
/// `0917-123-4567` and `(02) 812 3456` both pass.
pub fn validate_phone_number(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.is_empty() {
        return false;
    }

    is_ph_mobile(&cleaned) || is_ph_landline(&cleaned) || is_international(&cleaned)
}

fn strip_ph_prefix(value: &str) -> &str {
    value
        .strip_prefix("+63")
        .or_else(|| value.strip_prefix('0'))
        .unwrap_or(value)
}

fn is_ph_mobile(value: &str) -> bool {
    let rest = strip_ph_prefix(value);
    rest.len() == 10 && rest.starts_with('9') && rest.chars().all(|c| c.is_ascii_digit())
}

fn is_ph_landline(value: &str) -> bool {
    let rest = strip_ph_prefix(value);
    rest.len() == 8
        && rest.chars().all(|c| c.is_ascii_digit())
        && matches!(rest.as_bytes()[0], b'2'..=b'8')
}

fn is_international(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('+') else {
        return false;
    };

    (7..=15).contains(&rest.len())
        && !rest.starts_with('0')
        && rest.chars().all(|c| c.is_ascii_digit())
}
