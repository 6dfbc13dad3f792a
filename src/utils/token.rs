use chrono::{Duration, Utc};
use entity::user::Model as UserModel;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::types::{error::AppError, token::Claims};

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Signs and checks access tokens. Shared through `web::Data`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, Duration::minutes(config.expiry_minutes))
    }

    pub fn issue(&self, user: &UserModel) -> Result<String, AppError> {
        let now = Utc::now();
        self.sign(&Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        })
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(JWT_ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("failed to sign access token: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "rejected access token");
                AppError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserModel {
        let now = Utc::now();
        UserModel {
            id: new_id(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            password: "$argon2id$irrelevant".into(),
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn issued_token_carries_identity() {
        let tokens = TokenService::new("test-secret", Duration::minutes(60));
        let user = user();

        let token = tokens.issue(&user).unwrap();
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let ours = TokenService::new("test-secret", Duration::minutes(60));
        let theirs = TokenService::new("other-secret", Duration::minutes(60));
        let token = theirs.issue(&user()).unwrap();

        assert!(matches!(ours.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenService::new("test-secret", Duration::minutes(60));
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&Claims { sub: new_id(), email: "a@b.co".into(), iat: now - 7200, exp: now - 3600 })
            .unwrap();

        assert!(matches!(tokens.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn garbage_is_rejected() {
        let tokens = TokenService::new("test-secret", Duration::minutes(60));
        assert!(tokens.verify("invalid_token").is_err());
    }
}
