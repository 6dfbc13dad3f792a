use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::token::Claims;
use crate::types::user::UserRes;

/// Visible to the user themself and to anyone sharing an organisation.
#[get("/{user_id}")]
async fn get_user(
    db: web::Data<Arc<PostgresService>>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> ApiResult<Envelope<UserRes>> {
    let user_id = path.into_inner();

    if user_id != claims.sub && !db.users_share_organisation(claims.sub, user_id).await? {
        return Err(AppError::NotFound("User not found"));
    }

    let user = db
        .get_user_by_id(&user_id)
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound("User not found"),
            other => other,
        })?;

    Ok(ApiResponse::Ok(Envelope::success("User retrieved", UserRes::from(&user))))
}
