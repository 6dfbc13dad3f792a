use std::collections::BTreeMap;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub const REGISTRATION_FAILED: &str = "Registration unsuccessful";
pub const LOGIN_FAILED: &str = "Login unsuccessful";

/// One reason a single input field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }

    pub fn required() -> Self {
        Self::new("required", "This field is required.")
    }

    pub fn unique_email() -> Self {
        Self::new("unique", "user with this email already exists.")
    }
}

/// Field name (as the client spelled it) to every reason it was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldError>>);

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, err: FieldError) {
        self.0.entry(field.into()).or_default().push(err);
    }

    pub fn single(field: impl Into<String>, err: FieldError) -> Self {
        let mut errors = Self::default();
        errors.push(field, err);
        errors
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: &'static str, errors: FieldErrors },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("already exists")]
    AlreadyExists,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl From<BlockingError> for AppError {
    fn from(e: BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::Internal(format!("password hashing failed: {e}"))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl AppError {
    pub fn validation(message: &'static str, errors: FieldErrors) -> Self {
        Self::Validation { message, errors }
    }

    fn status(&self) -> &'static str {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) | Self::AuthenticationFailed => "Bad request",
            Self::Unauthorized => "Unauthorized",
            Self::NotFound(_) => "Not found",
            Self::AlreadyExists => "Conflict",
            Self::Db(_) | Self::Internal(_) => "Internal server error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } => *message,
            Self::BadRequest(message) => message.as_str(),
            Self::AuthenticationFailed => "Authentication failed",
            Self::Unauthorized => "Invalid or expired token",
            Self::NotFound(what) => *what,
            Self::AlreadyExists => "Resource already exists",
            Self::Db(_) | Self::Internal(_) => "Something went wrong",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound("Resource not found"),
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self, Self::Db(_) | Self::Internal(_)) {
            error!(error = %self, "request failed");
        }
        let errors = match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            status: self.status(),
            message: self.message(),
            errors,
        })
    }
}
