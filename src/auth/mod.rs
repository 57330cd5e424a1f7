use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access level granted to root operators.
pub const ROOT_ACCESS: &str = "root";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub tenant: String,
    pub user: String,
    pub access: String,
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(tenant: String, user: String, access: String, expiry_hours: u64) -> Result<Self, TokenError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(TokenError::InvalidExpiry(expiry_hours))?;

        Ok(Self {
            tenant,
            user,
            access,
            user_id: Uuid::new_v4(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("JWT secret not configured")]
    MissingSecret,
    #[error("Token lifetime of {0} hours is out of range")]
    InvalidExpiry(u64),
    #[error("JWT generation error: {0}")]
    Generation(String),
    #[error("Invalid JWT token: {0}")]
    Invalid(String),
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key).map_err(|e| TokenError::Generation(e.to_string()))
}

/// Validate JWT token and extract claims
pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| TokenError::Invalid(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_claims() {
        let claims = Claims::new("acme".into(), "alice".into(), "full".into(), 1).unwrap();
        let token = generate_jwt(&claims, "s3cret").unwrap();
        let decoded = validate_jwt(&token, "s3cret").unwrap();
        assert_eq!(decoded.tenant, "acme");
        assert_eq!(decoded.user_id, claims.user_id);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new("acme".into(), "alice".into(), "full".into(), 1).unwrap();
        let token = generate_jwt(&claims, "s3cret").unwrap();
        assert!(matches!(validate_jwt(&token, "other"), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn empty_secret_is_refused() {
        let claims = Claims::new("acme".into(), "alice".into(), "full".into(), 1).unwrap();
        assert!(matches!(generate_jwt(&claims, ""), Err(TokenError::MissingSecret)));
    }

    #[test]
    fn out_of_range_lifetime_is_an_error() {
        let result = Claims::new("acme".into(), "alice".into(), "full".into(), 1_000_000_000_000_000);
        assert!(matches!(result, Err(TokenError::InvalidExpiry(1_000_000_000_000_000))));
        assert!(matches!(
            Claims::new("acme".into(), "alice".into(), "full".into(), u64::MAX),
            Err(TokenError::InvalidExpiry(_))
        ));
    }
}
