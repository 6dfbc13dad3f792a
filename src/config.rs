use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_minutes: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} is invalid: {1}")]
    Invalid(&'static str, String),
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(key, raw)),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            port: Self::get_env_or("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            jwt: JwtConfig {
                secret: Self::get_env("JWT_SECRET")?,
                expiry_minutes: Self::get_env_or("JWT_EXPIRY_MINUTES", 60)?,
            },
        })
    }
}
