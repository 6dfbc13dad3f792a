use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, FieldError, FieldErrors, REGISTRATION_FAILED};
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::user::{AuthData, DBUserCreate, RUserRegister, UserRes};
use crate::utils::{password::hash_password, token::TokenService};

/// A signup that lost the race for its email on the unique index is
/// reported exactly like one caught by the upfront check.
fn email_taken_on_conflict(err: AppError) -> AppError {
    match err {
        AppError::AlreadyExists => AppError::validation(
            REGISTRATION_FAILED,
            FieldErrors::single("email", FieldError::unique_email()),
        ),
        other => other,
    }
}

#[post("")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RUserRegister>,
) -> ApiResult<Envelope<AuthData>> {
    let body = body.into_inner();

    let mut errors = body.validate().err().map(FieldErrors::from).unwrap_or_default();
    if !errors.contains("email") {
        if let Some(email) = body.email.as_deref() {
            if db.user_exists_by_email(email).await? {
                errors.push("email", FieldError::unique_email());
            }
        }
    }
    if !errors.is_empty() {
        return Err(AppError::validation(REGISTRATION_FAILED, errors));
    }

    let registration = body
        .into_registration()
        .ok_or_else(|| AppError::Internal("validated registration is missing fields".to_string()))?;

    let password = registration.password;
    let password_hash = web::block(move || hash_password(&password)).await??;

    let (user, organisation) = db
        .register_user(DBUserCreate {
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: registration.email,
            password_hash,
            phone: registration.phone,
        })
        .await
        .map_err(email_taken_on_conflict)?;

    info!(user_id = %user.id, organisation_id = %organisation.id, "registered user");

    let access_token = tokens.issue(&user)?;

    Ok(ApiResponse::Created(Envelope::success(
        "Registration successful",
        AuthData { access_token, user: UserRes::from(&user) },
    )))
}
