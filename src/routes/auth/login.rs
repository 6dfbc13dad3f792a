use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::db::postgres_service::PostgresService;
use crate::types::error::{AppError, LOGIN_FAILED};
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::user::{AuthData, RUserLogin, UserRes};
use crate::utils::{password::credentials_match, token::TokenService};

#[post("")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RUserLogin>,
) -> ApiResult<Envelope<AuthData>> {
    let body = body.into_inner();
    body.validate()
        .map_err(|e| AppError::validation(LOGIN_FAILED, e.into()))?;

    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(AppError::AuthenticationFailed);
    };

    let user = db.find_user_by_email(&email).await?;

    // unknown email and wrong password must look the same from outside
    let stored = user.as_ref().map(|u| u.password.clone());
    let matched = web::block(move || credentials_match(&password, stored.as_deref())).await?;
    let user = match user {
        Some(user) if matched => user,
        _ => {
            info!("failed login attempt");
            return Err(AppError::AuthenticationFailed);
        }
    };

    let access_token = tokens.issue(&user)?;

    Ok(ApiResponse::Ok(Envelope::success(
        "Login successful",
        AuthData { access_token, user: UserRes::from(&user) },
    )))
}
