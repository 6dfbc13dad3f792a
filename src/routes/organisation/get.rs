use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::organisation::OrganisationRes;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::token::Claims;

#[get("/{org_id}")]
async fn get_organisation(
    db: web::Data<Arc<PostgresService>>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> ApiResult<Envelope<OrganisationRes>> {
    let organisation = db
        .get_organisation_for_member(path.into_inner(), claims.sub)
        .await?;

    Ok(ApiResponse::Ok(Envelope::success(
        "Organisation retrieved",
        OrganisationRes::from(&organisation),
    )))
}
